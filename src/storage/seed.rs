use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial contents of a catalog.
///
/// Seed files are YAML:
///
/// ```yaml
/// authors:
///   - { id: 1, name: Ursula K. Le Guin }
/// books:
///   - { id: 1, name: A Wizard of Earthsea, author_id: 1 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl Seed {
    /// The dataset the service ships with.
    pub fn builtin() -> Self {
        Self {
            authors: vec![
                Author::new(1, "J. K. Rowling"),
                Author::new(2, "J. R. R. Tolkien"),
                Author::new(3, "Brent Weeks"),
            ],
            books: vec![
                Book::new(1, "Harry Potter and the Soceror's Stone ", 1),
                Book::new(2, "Harry Potter and the Chamber of Secrets", 1),
                Book::new(3, "Harry Potter and the Prisoner of Azkaban", 1),
                Book::new(4, "Harry Potter and the Goblet of Fire", 1),
                Book::new(5, "The Fellowship of the Ring", 2),
                Book::new(6, "The Tqo Towers", 2),
                Book::new(7, "The way of Shadows", 3),
                Book::new(8, "Beyond the Shadows", 3),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading seed file");
        let content = std::fs::read_to_string(path)?;
        let seed: Seed = serde_yaml::from_str(&content)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut book_ids: Vec<i32> = self.books.iter().map(|b| b.id).collect();
        book_ids.sort_unstable();
        if let Some(w) = book_ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(BookshelfError::Storage(format!(
                "Duplicate book id in seed: {}",
                w[0]
            )));
        }

        let mut author_ids: Vec<i32> = self.authors.iter().map(|a| a.id).collect();
        author_ids.sort_unstable();
        if let Some(w) = author_ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(BookshelfError::Storage(format!(
                "Duplicate author id in seed: {}",
                w[0]
            )));
        }

        Ok(())
    }
}
