//! # Shop Core
//!
//! Core types, error definitions and the user entity shared by every layer
//! of the shop user service.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
