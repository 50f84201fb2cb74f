//! Unified error types for all layers of the user service.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the shop user service.
///
/// The taxonomy mirrors what callers can observe over the wire: missing
/// entities, uniqueness violations, corrupt credentials, bad input, and
/// everything else collapsing into an internal failure.
#[derive(Error, Debug)]
pub enum ShopError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with key {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Uniqueness violation (e.g., duplicate mobile)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Stored credential string does not have the expected shape
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShopError {
    /// Returns the gRPC status code name this error is reported with.
    #[must_use]
    pub const fn grpc_code_name(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Validation(_) => "INVALID_ARGUMENT",
            Self::MalformedCredential(_)
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => "INTERNAL",
        }
    }

    /// Returns true if the error surfaces to callers as an internal failure.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::MalformedCredential(_)
                | Self::Database(_)
                | Self::Configuration(_)
                | Self::Internal(_)
                | Self::Other(_)
        )
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates an already-exists error.
    #[must_use]
    pub fn already_exists<T: Into<String>>(message: T) -> Self {
        Self::AlreadyExists(message.into())
    }

    /// Creates a malformed credential error.
    #[must_use]
    pub fn malformed<T: Into<String>>(message: T) -> Self {
        Self::MalformedCredential(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ShopError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                // MySQL error 1062 (ER_DUP_ENTRY)
                if db_err.is_unique_violation() {
                    return Self::AlreadyExists(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}
