//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File, Map};
use shop_core::ShopError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SHOP";

/// Layered configuration loader.
///
/// Sources are applied in order, later ones winning:
/// 1. `{config_dir}/default.toml`
/// 2. `{config_dir}/{environment}.toml`
/// 3. `{config_dir}/local.toml` (not committed)
/// 4. Environment variables with the `SHOP_` prefix and `__` separator
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Option<String>,
    env_overrides: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Creates a loader reading files from `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: None,
            env_overrides: None,
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Pins the environment name instead of reading `SHOP_ENVIRONMENT`.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use]
    pub fn with_env_overrides(mut self, vars: Map<String, String>) -> Self {
        self.env_overrides = Some(vars);
        self
    }

    /// Loads, deserializes and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, ShopError> {
        if self.env_overrides.is_none() {
            if let Err(e) = dotenvy::dotenv() {
                debug!("No .env file found or error loading it: {}", e);
            }
        }

        let environment = self.environment.clone().unwrap_or_else(|| {
            std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT")).unwrap_or_else(|_| "development".to_string())
        });

        info!(environment = %environment, dir = %self.config_dir.display(), "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(self.env_overrides.clone()),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_shop_error)?;

        app_config.app.environment = environment;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| ShopError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }

    /// Returns the directory files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn config_error_to_shop_error(err: ConfigError) -> ShopError {
    ShopError::Configuration(err.to_string())
}
