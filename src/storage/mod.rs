//! Storage layer for the catalog.
//!
//! Resolvers only see the [`Catalog`] trait, held as a [`SharedCatalog`], so
//! the backing store can be swapped without touching the schema.
//!
//! ## Components
//!
//! - [`Catalog`]: lookup, listing and append operations
//! - [`MemoryCatalog`]: lock-protected in-memory implementation
//! - [`Seed`]: initial catalog contents, built-in or loaded from YAML
//! - [`relations`]: typed book/author traversal

mod memory_repository;
pub mod relations;
mod repository;
mod seed;

pub use memory_repository::MemoryCatalog;
pub use repository::{Catalog, SharedCatalog};
pub use seed::Seed;
