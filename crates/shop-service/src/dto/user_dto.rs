//! User-related DTOs.

use serde::{Deserialize, Serialize};
use shop_core::rules;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 11, message = "Mobile must be 1-11 digits"),
        custom(function = "rules::mobile_digits")
    )]
    pub mobile: String,

    /// Plaintext password; encoded before storage.
    #[validate(custom(function = "rules::not_blank"))]
    pub password: String,

    #[validate(length(max = 20, message = "Nickname cannot exceed 20 characters"))]
    pub nick_name: String,
}

/// Request to overwrite a user's profile.
///
/// All three fields are written; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 20, message = "Nickname cannot exceed 20 characters"))]
    pub nick_name: String,

    #[validate(custom(function = "rules::known_gender"))]
    pub gender: String,

    /// Birthday as seconds since the Unix epoch.
    pub birthday: u64,
}

/// Wire projection of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    /// Composite credential string, never the plaintext.
    pub password: String,
    pub mobile: String,
    pub nick_name: String,
    /// Birthday in epoch seconds; `None` when the user has none.
    pub birthday: Option<i64>,
    pub gender: String,
    pub role: i32,
}

/// One page of users plus the count of all live users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub total: u64,
    pub data: Vec<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{ShopError, ValidateExt};

    fn create_request(mobile: &str, password: &str, nick_name: &str) -> CreateUserRequest {
        CreateUserRequest {
            mobile: mobile.to_string(),
            password: password.to_string(),
            nick_name: nick_name.to_string(),
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request("15999962510", "HardCodePassWord", "bobby0")
            .validate_request()
            .is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_mobile() {
        for mobile in ["", "159999625101", "1599996251a"] {
            assert!(
                matches!(
                    create_request(mobile, "pw", "n").validate_request(),
                    Err(ShopError::Validation(_))
                ),
                "{mobile:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_create_request_rejects_blank_password() {
        let err = create_request("15999962510", "  ", "n").validate_request().unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_create_request_rejects_long_nickname() {
        let request = create_request("15999962510", "pw", &"x".repeat(21));
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_update_request_gender() {
        let mut request = UpdateUserRequest {
            nick_name: "new".to_string(),
            gender: "female".to_string(),
            birthday: 0,
        };
        assert!(request.validate_request().is_ok());

        request.gender = "unknown".to_string();
        let err = request.validate_request().unwrap_err();
        assert!(err.to_string().contains("gender"));
    }
}
