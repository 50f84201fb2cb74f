//! Validation utilities.

use crate::ShopError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ShopError` on failure.
    fn validate_request(&self) -> Result<(), ShopError> {
        self.validate().map_err(validation_errors_to_shop_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `ShopError`.
#[must_use]
pub fn validation_errors_to_shop_error(errors: ValidationErrors) -> ShopError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();

    ShopError::Validation(messages.join("; "))
}

/// Common validation functions.
pub mod rules {
    use crate::Gender;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a mobile number consists of ASCII digits only.
    pub fn mobile_digits(mobile: &str) -> Result<(), ValidationError> {
        if mobile.is_empty() || !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("mobile_not_digits"));
        }
        Ok(())
    }

    /// Validates that a gender is one of the known values.
    pub fn known_gender(gender: &str) -> Result<(), ValidationError> {
        gender
            .parse::<Gender>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("unknown_gender"))
    }
}
