//! Data models for the catalog.
//!
//! - [`Book`]: a book, referencing its author through `author_id`
//! - [`Author`]: an author of zero or more books
//! - [`NewBook`] / [`NewAuthor`]: records awaiting an id from the store
//!
//! There is no referential integrity between the two: a book may point at an
//! author id that does not exist.

mod author;
mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook};
