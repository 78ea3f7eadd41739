//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `SHAREGALLERY__*` environment variables. Each sub-module
//! represents a logical configuration section. Every field carries a
//! default, so an empty configuration is valid.

pub mod app;
pub mod gallery;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::gallery::GalleryConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Gallery and share-manifest settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// `config/{env}` and environment variables prefixed with
    /// `SHAREGALLERY` (nested keys separated by `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREGALLERY")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// The `host:port` pair the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gallery.archive_extension, ".zip");
        assert_eq!(config.gallery.file_url_prefix, "/api/shares");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_sections_override_defaults() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [gallery]
            manifest_path = "/srv/shares.json"
            archive_extension = ".tar"

            [logging]
            format = "pretty"
        "#;

        let config = AppConfig::from_toml_str(toml).expect("config should parse");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.gallery.manifest_path, "/srv/shares.json");
        assert_eq!(config.gallery.archive_extension, ".tar");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_value_is_configuration_error() {
        let err = AppConfig::from_toml_str("[server]\nport = \"not-a-port\"").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
