use crate::error::{BookshelfError, Result};
use crate::storage::{MemoryCatalog, Seed};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer to browsers on `GET /graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Start with the seed data instead of empty collections.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// YAML file replacing the built-in seed. Relative paths resolve against
    /// the directory holding the config file.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            seed_file: None,
        }
    }
}

impl BookshelfConfig {
    /// Loads the config at `path`, or discovers one from `start_path` upward.
    ///
    /// Returns the config together with the directory relative paths are
    /// resolved against. Without any config file the defaults are used and
    /// `start_path` is that directory.
    pub fn load(path: Option<&Path>, start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(BookshelfError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        let Some(config_path) = config_path else {
            tracing::debug!("No config file found, using defaults");
            return Ok((Self::default(), start_path.to_path_buf()));
        };

        tracing::debug!(path = %config_path.display(), "Loading config");
        let content = std::fs::read_to_string(&config_path)?;
        let config: BookshelfConfig = serde_yaml::from_str(&content)?;
        let root = config_path
            .parent()
            .ok_or_else(|| BookshelfError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn seed_path(&self, root: &Path) -> Option<PathBuf> {
        self.store.seed_file.as_ref().map(|p| root.join(p))
    }

    /// Builds the catalog described by the `store` section.
    pub fn open_catalog(&self, root: &Path) -> Result<MemoryCatalog> {
        if !self.store.seed {
            if let Some(path) = &self.store.seed_file {
                tracing::warn!(
                    path = %path.display(),
                    "store.seed is false, ignoring store.seed_file"
                );
            }
            return Ok(MemoryCatalog::empty());
        }
        let seed = match self.seed_path(root) {
            Some(path) => Seed::load(&path)?,
            None => Seed::builtin(),
        };
        Ok(MemoryCatalog::new(seed))
    }
}
