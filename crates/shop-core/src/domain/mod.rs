//! Domain entities and value objects for user accounts.

mod gender;
mod role;
mod user;

pub use gender::*;
pub use role::*;
pub use user::*;
