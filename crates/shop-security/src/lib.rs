//! # Shop Security
//!
//! Credential encoding and verification for the shop user service.

pub mod password;

pub use password::*;
