//! User role value object.

use crate::ShopError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role classification stored as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Ordinary customer account. Storage default.
    #[default]
    Customer,
    /// Administrator account.
    Admin,
}

impl UserRole {
    /// Returns the integer code persisted and sent on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Customer => 1,
            Self::Admin => 2,
        }
    }

    /// Checks if the role is privileged.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl TryFrom<i32> for UserRole {
    type Error = ShopError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Customer),
            2 => Ok(Self::Admin),
            other => Err(ShopError::Internal(format!("Unknown role code in database: {other}"))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}
