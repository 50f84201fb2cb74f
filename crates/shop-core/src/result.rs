//! Result type aliases for the user service.

use crate::ShopError;

/// A specialized `Result` type for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
