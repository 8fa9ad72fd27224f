use crate::model;
use crate::storage::relations;
use async_graphql::{Context, Object, Result};

use super::schema::catalog;

#[derive(Clone, Debug)]
pub struct Book(model::Book);

/// This represents a book written by an author
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The author this book references, or null if no such author exists.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let catalog = catalog(ctx)?;
        Ok(relations::author_of(&self.0, catalog.as_ref())?.map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self(b)
    }
}

#[derive(Clone, Debug)]
pub struct Author(model::Author);

/// This represents an author of a book
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// The first book written by this author. See `allBooks` for the full list.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Book>> {
        let catalog = catalog(ctx)?;
        Ok(relations::first_book_of(&self.0, catalog.as_ref())?.map(Book::from))
    }

    /// Every book written by this author, in insertion order.
    async fn all_books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let catalog = catalog(ctx)?;
        let books = relations::books_of(&self.0, catalog.as_ref())?;
        Ok(books.into_iter().map(Book::from).collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self(a)
    }
}
