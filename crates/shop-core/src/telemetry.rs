//! Tracing subscriber initialisation.
//!
//! The filter directive is taken from `RUST_LOG` when set, otherwise from the
//! configured default.

use crate::{ShopError, ShopResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info,shop=debug,tower_http=debug";

/// Installs the global tracing subscriber.
///
/// `json` switches the formatter to newline-delimited JSON. Fails if the
/// filter cannot be parsed or a global subscriber is already installed.
pub fn init_tracing(default_filter: &str, json: bool) -> ShopResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| ShopError::Configuration(format!("Invalid log filter '{default_filter}': {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| ShopError::Configuration(format!("Failed to install tracing subscriber: {e}")))
}
