//! # Shop Repository
//!
//! Data access for the shop user service.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>
//! MySqlUserRepository
//!   ↓  Arc<DatabasePool>
//! MySQL
//! ```
//!
//! With the `test-utils` feature, `InMemoryUserRepository` implements the
//! same contract without a database for the service and gRPC tests.

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryUserRepository;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
