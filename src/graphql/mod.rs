//! GraphQL schema, resolvers and HTTP endpoint for the catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://127.0.0.1:5000/graphql)
//! bookshelf serve
//!
//! # Execute a query from CLI
//! bookshelf query '{ book(id: 5) { name author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addAuthor(name: "New Author") { id name }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`
//! - **Relations**: `Book.author`, `Author.books` (first book only),
//!   `Author.allBooks`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
