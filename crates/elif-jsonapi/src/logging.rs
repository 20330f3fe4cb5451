//! Logging setup
//!
//! Route generation reports through `tracing`. Applications that do not
//! install their own subscriber can use [`init_logging`].

use crate::errors::{RoutingError, RoutingResult};
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    pub level: String,
    /// Enable JSON structured logging (vs plain text)
    pub json_format: bool,
    /// Enable pretty printing for development
    pub pretty_print: bool,
    /// Environment filter (supports filters like "elif_jsonapi=debug")
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_print: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create production logging configuration (JSON, info level)
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            json_format: true,
            pretty_print: false,
            env_filter: Some("elif_jsonapi=info".to_string()),
        }
    }

    /// Create development logging configuration with pretty output
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            pretty_print: true,
            env_filter: Some("elif_jsonapi=trace".to_string()),
        }
    }

    /// Minimal output
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            pretty_print: false,
            env_filter: Some("elif_jsonapi=error".to_string()),
        }
    }

    /// Override the environment filter directive
    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> RoutingResult<EnvFilter> {
        let directives = self.env_filter.as_deref().unwrap_or(&self.level);

        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directives))
            .map_err(|err| RoutingError::logging(err.to_string()))
    }
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> RoutingResult<()> {
    let filter = config.filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json_format {
        registry
            .with(Layer::new().with_writer(io::stdout).json())
            .try_init()
    } else if config.pretty_print {
        registry
            .with(Layer::new().with_writer(io::stdout).pretty())
            .try_init()
    } else {
        registry.with(Layer::new().with_writer(io::stdout)).try_init()
    };
    installed.map_err(|err| RoutingError::logging(err.to_string()))?;

    let format = if config.json_format { "json" } else { "text" };
    tracing::info!(
        target: "elif_jsonapi::logging",
        level = %config.level,
        format,
        "logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(LoggingConfig::production().json_format);
        assert!(!LoggingConfig::test().pretty_print);
        assert_eq!(LoggingConfig::default().level, "info");
    }

    #[test]
    fn test_with_env_filter() {
        let config = LoggingConfig::default().with_env_filter("elif_jsonapi=debug");
        assert_eq!(config.env_filter.as_deref(), Some("elif_jsonapi=debug"));
    }
}
