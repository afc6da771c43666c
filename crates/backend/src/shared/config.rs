use std::collections::HashSet;
use std::path::{Path, PathBuf};

use contracts::shared::store_config::StoreConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub stores: Vec<StoreConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one [[stores]] entry is required")]
    NoStores,

    #[error("store code '{0}' is configured more than once")]
    DuplicateStoreCode(String),

    #[error("store code must not be empty (store '{0}')")]
    EmptyStoreCode(String),

    #[error("more than one store is marked is_default_store")]
    MultipleDefaults,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stores.is_empty() {
            return Err(ConfigError::NoStores);
        }

        let mut seen = HashSet::new();
        for store in &self.stores {
            if store.store_code.trim().is_empty() {
                return Err(ConfigError::EmptyStoreCode(store.store_name.clone()));
            }
            if !seen.insert(store.store_code.as_str()) {
                return Err(ConfigError::DuplicateStoreCode(store.store_code.clone()));
            }
        }

        if self.stores.iter().filter(|s| s.is_default_store).count() > 1 {
            return Err(ConfigError::MultipleDefaults);
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[[stores]]
store_code = "default"
store_name = "Default Store View"
locale = "en_US"
default_display_currency_code = "USD"
secure_base_media_url = "https://localhost/media/"
is_default_store = true

[[stores]]
store_code = "outlet"
store_name = "Outlet"
locale = "en_US"
default_display_currency_code = "USD"
secure_base_media_url = "https://localhost/media/"

[[stores]]
store_code = "fr"
store_name = "Boutique France"
locale = "fr_FR"
default_display_currency_code = "EUR"
secure_base_media_url = "https://localhost/media/"
"#;

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Resolve the static files directory.
/// Relative paths are resolved against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.server.static_dir)
}
