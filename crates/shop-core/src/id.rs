//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user IDs.
///
/// User IDs are assigned by storage on insert, so there is no constructor
/// that invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Wraps a storage-assigned identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }

    #[test]
    fn test_user_id_conversions() {
        let id = UserId::from(7_u64);
        assert_eq!(u64::from(id), 7);
        assert_eq!(id.into_inner(), 7);
    }

    #[test]
    fn test_user_id_serializes_transparently() {
        let json = serde_json::to_string(&UserId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
