//! Typed traversal between books and authors.

use super::repository::Catalog;
use crate::{
    error::Result,
    model::{Author, Book},
};

/// The author a book points at, if that author exists.
pub fn author_of(book: &Book, catalog: &dyn Catalog) -> Result<Option<Author>> {
    catalog.author(book.author_id)
}

/// The earliest-inserted book written by `author`.
pub fn first_book_of(author: &Author, catalog: &dyn Catalog) -> Result<Option<Book>> {
    Ok(catalog.books_by_author(author.id)?.into_iter().next())
}

/// Every book written by `author`, in insertion order.
pub fn books_of(author: &Author, catalog: &dyn Catalog) -> Result<Vec<Book>> {
    catalog.books_by_author(author.id)
}
