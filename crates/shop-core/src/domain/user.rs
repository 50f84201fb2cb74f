//! User entity.

use super::{Gender, UserRole};
use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier, immutable after insert.
    pub id: UserId,

    /// Unique login identifier.
    pub mobile: String,

    /// Composite credential string (`$<tag>$<salt>$<hash>`).
    pub password: String,

    /// Display name.
    pub nick_name: String,

    /// Birthday; `None` means the user never provided one.
    pub birthday: Option<DateTime<Utc>>,

    pub gender: Gender,

    pub role: UserRole,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Overwrites the mutable profile fields, leaving identity, mobile,
    /// credential and role untouched.
    pub fn update_profile(&mut self, nick_name: String, birthday: Option<DateTime<Utc>>, gender: Gender) {
        self.nick_name = nick_name;
        self.birthday = birthday;
        self.gender = gender;
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A user that has not been inserted yet.
///
/// Carries only what the create operation supplies; id, gender, role and
/// birthday come from storage defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub mobile: String,
    /// Already-encoded composite credential.
    pub password: String,
    pub nick_name: String,
}

impl NewUser {
    /// Creates a new user record ready for insertion.
    #[must_use]
    pub fn new(mobile: impl Into<String>, password: impl Into<String>, nick_name: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
            password: password.into(),
            nick_name: nick_name.into(),
        }
    }
}
