//! Configuration file loader
//!
//! The sweep reads at most one file: `sweep.toml` at the execution root.
//! Values it leaves out keep their built-in defaults.

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the optional configuration file at the execution root
pub const CONFIG_FILE: &str = "sweep.toml";

/// Errors raised while reading `sweep.toml`
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

impl ConfigLoadError {
    /// File that could not be read
    pub fn path(&self) -> &Path {
        match self {
            ConfigLoadError::Parse { path, .. } => path,
        }
    }
}

/// Configuration loader that merges the optional file over the defaults
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the execution root `root`
    ///
    /// Priority (highest to lowest):
    /// 1. `<root>/sweep.toml`, if present
    /// 2. Default values
    pub fn load(root: &Path) -> Result<FileConfig, ConfigLoadError> {
        let defaults = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        let Some(path) = Self::config_path(root) else {
            return defaults.extract().map_err(|e| ConfigLoadError::Parse {
                path: root.join(CONFIG_FILE),
                source: Box::new(e),
            });
        };

        debug!("Loading sweep configuration from {}", path.display());
        defaults
            .merge(Toml::file(&path))
            .extract()
            .map_err(|e| ConfigLoadError::Parse {
                path,
                source: Box::new(e),
            })
    }

    /// Get the config file path under `root` (if it exists)
    pub fn config_path(root: &Path) -> Option<PathBuf> {
        let path = root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }
}
