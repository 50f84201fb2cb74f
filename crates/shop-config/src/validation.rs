//! Configuration validation.
//!
//! Collects every problem in one pass so a misconfigured deployment fails
//! at startup with the full list.

use crate::{AppConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
use std::fmt;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log filter directive does not parse.
    InvalidLogFilter { value: String, message: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {name}: {value} (must be 1-65535)")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(f, "Invalid pool size: min ({min}) cannot be greater than max ({max})")
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {value} exceeds maximum allowed ({maximum})")
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {url_type} URL: {message}")
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{name}' must be positive, got {value}")
            }
            Self::InvalidLogFilter { value, message } => {
                write!(f, "Invalid log filter '{value}': {message}")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.grpc_port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "grpc_port".to_string(),
                value: config.grpc_port,
            });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else {
            match Url::parse(&config.url) {
                Ok(url) if url.scheme() == "mysql" => {}
                Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "database".to_string(),
                    message: format!("unsupported scheme '{}', expected mysql://", url.scheme()),
                }),
                Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "database".to_string(),
                    message: e.to_string(),
                }),
            }
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        if let Err(e) = EnvFilter::try_new(&config.log_filter) {
            errors.push(ConfigValidationError::InvalidLogFilter {
                value: config.log_filter.clone(),
                message: e.to_string(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
