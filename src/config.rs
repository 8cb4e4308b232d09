//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::repository::seed::DEMO_BOOK_COUNT;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// When set, logs are also written to daily-rolling files in this directory
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// First id handed out by an empty store
    pub starting_id: i32,
    /// Load the demo catalog at startup
    pub seed_demo_data: bool,
    pub default_page_size: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. BOOKSHELF__SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.catalog.validate()?;
        Ok(config)
    }
}

impl CatalogConfig {
    /// Reject a `starting_id` that leaves no room for the ids the store must hand out
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reserved = if self.seed_demo_data {
            DEMO_BOOK_COUNT as i32
        } else {
            1
        };
        let max_start = i32::MAX - (reserved - 1);

        if self.starting_id < 1 || self.starting_id > max_start {
            return Err(ConfigError::Message(format!(
                "catalog.starting_id must be between 1 and {}, got {}",
                max_start, self.starting_id
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            starting_id: 1,
            seed_demo_data: true,
            default_page_size: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.starting_id, 1);
        assert_eq!(config.catalog.default_page_size, 5);
        assert!(config.catalog.seed_demo_data);
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_starting_id_range() {
        let mut catalog = CatalogConfig::default();
        assert!(catalog.validate().is_ok());

        catalog.starting_id = 0;
        assert!(catalog.validate().is_err());

        catalog.starting_id = i32::MAX;
        assert!(catalog.validate().is_err());

        catalog.seed_demo_data = false;
        assert!(catalog.validate().is_ok());

        catalog.seed_demo_data = true;
        catalog.starting_id = i32::MAX - (DEMO_BOOK_COUNT as i32 - 1);
        assert!(catalog.validate().is_ok());
        catalog.starting_id += 1;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("catalog.starting_id", 100)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.starting_id, 100);
        assert_eq!(config.catalog.default_page_size, 5);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
