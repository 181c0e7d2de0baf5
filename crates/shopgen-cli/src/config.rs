use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shopgen_core::DEFAULT_DATABASE_FILE;
use shopgen_generate::GenerateOptions;
use shopgen_store::DEFAULT_REPORT_LIMIT;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Settings shared by every subcommand.
///
/// Each stage receives these explicitly; nothing is read from globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopgenConfig {
    /// Directory holding the flat files and the database.
    pub data_dir: PathBuf,
    /// Database file name, relative to `data_dir`.
    pub database: PathBuf,
    pub report_limit: u32,
    pub generate: GenerateOptions,
}

impl Default for ShopgenConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            database: PathBuf::from(DEFAULT_DATABASE_FILE),
            report_limit: DEFAULT_REPORT_LIMIT,
            generate: GenerateOptions::default(),
        }
    }
}

impl ShopgenConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database)
    }
}

/// Load settings from `path`, or fall back to defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ShopgenConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ShopgenConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ShopgenConfig = toml::from_str(
            r#"
            data_dir = "data"

            [generate]
            record_count = 10
            anchor = "2024-06-30T12:00:00"
            max_items_per_order = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path(), PathBuf::from("data/ecommerce.db"));
        assert_eq!(config.report_limit, 5);
        assert_eq!(config.generate.record_count, 10);
        assert_eq!(config.generate.seed, 42);
        assert_eq!(config.generate.min_items_per_order, 1);
        assert_eq!(config.generate.max_items_per_order, 3);
        assert_eq!(config.generate.anchor.to_string(), "2024-06-30 12:00:00");
    }

    #[test]
    fn missing_config_file_is_reported() {
        let path = std::env::temp_dir().join("shopgen_config_that_does_not_exist.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.generate.record_count, 50);
    }
}
