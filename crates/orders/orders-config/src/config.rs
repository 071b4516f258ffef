use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
pub struct OrdersConfig {
    #[serde(default = "defaults::resource_dir")]
    pub resource_dir: String,
    #[serde(default = "defaults::catalog_file")]
    pub catalog_file: String,
    #[serde(default = "defaults::order_files")]
    pub order_files: Vec<String>,
    /// Slot count of the product catalog. Ten matches the historical
    /// fixed-size table; products past the ceiling are dropped.
    #[serde(default = "defaults::catalog_capacity")]
    pub catalog_capacity: usize,
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

mod defaults {
    pub fn resource_dir() -> String {
        "resources".into()
    }

    pub fn catalog_file() -> String {
        "products.txt".into()
    }

    pub fn order_files() -> Vec<String> {
        vec![
            "2021_order_details.txt".into(),
            "2022_order_details.txt".into(),
            "2023_order_details.txt".into(),
            "2024_order_details.txt".into(),
        ]
    }

    pub fn catalog_capacity() -> usize {
        10
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            resource_dir: defaults::resource_dir(),
            catalog_file: defaults::catalog_file(),
            order_files: defaults::order_files(),
            catalog_capacity: defaults::catalog_capacity(),
            log_level: defaults::log_level(),
        }
    }
}

impl OrdersConfig {
    pub fn load(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config: OrdersConfig = toml::from_str(&text)?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to the built-in
    /// defaults. The binary takes no flags, so a missing config file is
    /// the normal case rather than an error.
    pub fn load_or_default(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        Path::new(&self.resource_dir).join(&self.catalog_file)
    }

    pub fn order_paths(&self) -> Vec<PathBuf> {
        self.order_files
            .iter()
            .map(|name| Path::new(&self.resource_dir).join(name))
            .collect()
    }
}
