//! Server-side configuration.
//!
//! Reads `/etc/mindfood/<context>.toml` or an explicit path.

use std::path::{Path, PathBuf};

use catalog::CatalogConfig;
use mindfood_core::ServiceConfig;
use serde::Deserialize;

/// Directory holding named server configs.
const CONFIG_DIR: &str = "/etc/mindfood";

/// Storage section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base data directory; the catalog database defaults to `{data_dir}/data.sqlite`.
    pub data_dir: String,

    /// Explicit SQLite database path.
    #[serde(default)]
    pub sqlite_path: Option<String>,
}

/// Server configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address; `--listen` overrides it.
    #[serde(default = "default_listen")]
    pub listen: String,

    pub storage: StorageConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    ///
    /// Anything containing `/` or `.` is taken as a path; a bare name maps
    /// to `/etc/mindfood/<name>.toml`.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            Path::new(CONFIG_DIR).join(format!("{name_or_path}.toml"))
        }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Refuse to start on configurations that cannot work.
    pub fn verify(&self) -> anyhow::Result<()> {
        if self.storage.data_dir.is_empty() {
            anyhow::bail!("storage.data_dir is empty in configuration.");
        }
        if self.catalog.default_nb == 0 || self.catalog.default_nb > self.catalog.max_nb {
            anyhow::bail!(
                "catalog.default_nb must be between 1 and catalog.max_nb ({}), got {}",
                self.catalog.max_nb,
                self.catalog.default_nb
            );
        }
        Ok(())
    }

    /// Storage settings for the shared stores, with an optional listen override.
    pub fn service_config(&self, listen: Option<&str>) -> ServiceConfig {
        ServiceConfig {
            data_dir: Some(PathBuf::from(&self.storage.data_dir)),
            sqlite_path: self.storage.sqlite_path.as_ref().map(PathBuf::from),
            listen: listen.unwrap_or(self.listen.as_str()).to_string(),
        }
    }
}
