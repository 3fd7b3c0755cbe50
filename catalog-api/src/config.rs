//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::{Cli, SeedConfig};
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, CORS)
    #[serde(default)]
    pub server: catalog_axum::config::AxumConfig,

    /// Database configuration (file path or in-memory)
    #[serde(default)]
    pub database: catalog_sqlite::config::SqliteConfig,

    /// Seed file locations
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep the store in a file
    /// export APP_DATABASE__DATABASE_PATH="catalog.db"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3030"
    ///
    /// # Point at other seed data
    /// export APP_SEED__REVIEWS="/srv/seed/reviews.json"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write as _, path::PathBuf};

    #[test]
    fn defaults_without_a_file() {
        let config = AppConfig::load(&Cli::default()).unwrap();
        assert_eq!(config.server.bind_address.port(), 3030);
        assert!(config.server.cors);
        assert!(config.database.database_path.is_none());
        assert_eq!(config.seed.reviews, PathBuf::from("data/reviews.json"));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
            [server]
            bind_address = "127.0.0.1:8080"
            cors = false

            [database]
            database_path = "catalog.db"

            [seed]
            dealerships = "/srv/seed/dealerships.json"
            "#
        )
        .unwrap();

        let cli = Cli {
            config: Some(file.path().to_owned()),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();

        assert_eq!(config.server.bind_address.to_string(), "127.0.0.1:8080");
        assert!(!config.server.cors);
        assert_eq!(
            config.database.database_path,
            Some(PathBuf::from("catalog.db"))
        );
        assert!(config.database.create_if_missing);
        assert_eq!(
            config.seed.dealerships,
            PathBuf::from("/srv/seed/dealerships.json")
        );
        // untouched keys keep their defaults
        assert_eq!(config.seed.reviews, PathBuf::from("data/reviews.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
