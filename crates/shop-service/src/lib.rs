//! # Shop Service
//!
//! Business logic for the shop user service: account creation, lookup,
//! listing, profile updates and password checks.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
