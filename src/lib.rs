//! # Bookshelf - a GraphQL API over books and authors
//!
//! Bookshelf serves a small catalog of books and the authors who wrote them
//! through a single GraphQL endpoint. The catalog lives in memory and starts
//! from a fixed seed, so every restart begins from the same data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:5000/graphql (GraphiQL in the browser)
//! bookshelf serve
//!
//! # One-off query against a fresh catalog
//! bookshelf query '{ book(id: 5) { name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (Book, Author)
//! - [`storage`]: Catalog trait and in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

pub mod logging;

/// Data models for books and authors.
pub mod model;

/// Catalog storage.
///
/// Repository trait, in-memory implementation and seed data.
pub mod storage;
