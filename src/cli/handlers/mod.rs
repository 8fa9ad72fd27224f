mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::storage::SharedCatalog;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub catalog: SharedCatalog,
}

impl CommandContext {
    /// `root` is the directory relative store paths resolve against.
    pub fn new(config: BookshelfConfig, root: &Path) -> Result<Self> {
        let catalog = config
            .open_catalog(root)
            .context("Failed to open catalog")?;
        Ok(Self {
            config,
            catalog: Arc::new(catalog),
        })
    }
}
