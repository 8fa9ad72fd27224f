use super::repository::Catalog;
use super::seed::Seed;
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book, NewAuthor, NewBook},
};
use parking_lot::RwLock;

/// Collections plus the next id to hand out for each.
#[derive(Debug)]
struct CatalogState {
    books: Vec<Book>,
    authors: Vec<Author>,
    next_book_id: i64,
    next_author_id: i64,
}

impl CatalogState {
    fn new(books: Vec<Book>, authors: Vec<Author>) -> Self {
        let next_book_id = books.iter().map(|b| i64::from(b.id)).max().unwrap_or(0) + 1;
        let next_author_id = authors.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        Self {
            books,
            authors,
            next_book_id,
            next_author_id,
        }
    }
}

/// Takes the current value of `counter` and advances it.
///
/// The counter is wider than an id so that handing out `i32::MAX` still works.
fn allocate(counter: &mut i64, what: &str) -> Result<i32> {
    let id = i32::try_from(*counter)
        .map_err(|_| BookshelfError::Storage(format!("{} id space exhausted", what)))?;
    *counter += 1;
    Ok(id)
}

/// Process-local catalog. Everything is lost when the process exits.
///
/// Ids come from per-collection counters and are never reused.
#[derive(Debug)]
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
}

impl MemoryCatalog {
    pub fn new(seed: Seed) -> Self {
        tracing::debug!(
            books = seed.books.len(),
            authors = seed.authors.len(),
            "Initializing in-memory catalog"
        );
        Self {
            state: RwLock::new(CatalogState::new(seed.books, seed.authors)),
        }
    }

    pub fn empty() -> Self {
        Self::new(Seed::default())
    }

    /// Catalog pre-filled with the built-in dataset.
    pub fn seeded() -> Self {
        Self::new(Seed::builtin())
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog for MemoryCatalog {
    fn book(&self, id: i32) -> Result<Option<Book>> {
        let state = self.state.read();
        Ok(state.books.iter().find(|b| b.id == id).cloned())
    }

    fn books(&self) -> Result<Vec<Book>> {
        Ok(self.state.read().books.clone())
    }

    fn author(&self, id: i32) -> Result<Option<Author>> {
        let state = self.state.read();
        Ok(state.authors.iter().find(|a| a.id == id).cloned())
    }

    fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.state.read().authors.clone())
    }

    fn add_book(&self, book: NewBook) -> Result<Book> {
        let mut state = self.state.write();
        let id = allocate(&mut state.next_book_id, "book")?;
        let book = book.with_id(id);
        tracing::info!(id = book.id, name = %book.name, author_id = book.author_id, "Adding book");
        state.books.push(book.clone());
        Ok(book)
    }

    fn add_author(&self, author: NewAuthor) -> Result<Author> {
        let mut state = self.state.write();
        let id = allocate(&mut state.next_author_id, "author")?;
        let author = author.with_id(id);
        tracing::info!(id = author.id, name = %author.name, "Adding author");
        state.authors.push(author.clone());
        Ok(author)
    }

    fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>> {
        let state = self.state.read();
        Ok(state
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }
}
