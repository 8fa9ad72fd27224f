use crate::{
    error::Result,
    model::{Author, Book, NewAuthor, NewBook},
};
use std::sync::Arc;

/// Shared handle to a catalog, as stored in the GraphQL schema data.
pub type SharedCatalog = Arc<dyn Catalog>;

/// Storage for books and authors.
///
/// Lookups return `Ok(None)` on a miss. Listings preserve insertion order.
/// Implementations allocate ids on append and must never hand out the same
/// id twice for a collection.
pub trait Catalog: Send + Sync {
    fn book(&self, id: i32) -> Result<Option<Book>>;

    fn books(&self) -> Result<Vec<Book>>;

    fn author(&self, id: i32) -> Result<Option<Author>>;

    fn authors(&self) -> Result<Vec<Author>>;

    fn add_book(&self, book: NewBook) -> Result<Book>;

    fn add_author(&self, author: NewAuthor) -> Result<Author>;

    /// All books referencing `author_id`, in insertion order.
    fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>> {
        let mut books = self.books()?;
        books.retain(|b| b.author_id == author_id);
        Ok(books)
    }
}
