//! # CLI Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHIPSTORE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the snapshot file, loaded at startup and overwritten on
    /// exit.
    pub data_file: PathBuf,

    /// Default tracing filter directive when `SHIPSTORE_LOG` is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            data_file: PathBuf::from("shipping-store.json"),
            log_filter: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHIPSTORE_DATA_FILE`: Override the snapshot file path
    /// - `SHIPSTORE_LOG`: Override the tracing filter (e.g. "debug")
    pub fn from_env() -> Self {
        let mut config = CliConfig::default();

        if let Ok(data_file) = std::env::var("SHIPSTORE_DATA_FILE") {
            config.data_file = PathBuf::from(data_file);
        }

        if let Ok(filter) = std::env::var("SHIPSTORE_LOG") {
            config.log_filter = filter;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.data_file, PathBuf::from("shipping-store.json"));
        assert_eq!(config.log_filter, "info");
    }
}
