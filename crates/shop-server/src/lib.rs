//! # Shop Server Library
//!
//! Wiring and startup utilities for the shop user service binary.

pub mod app;
pub mod startup;
