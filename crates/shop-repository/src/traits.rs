//! Repository trait definitions.

use async_trait::async_trait;
use shop_core::{NewUser, Page, PageRequest, ShopResult, User, UserId};

/// User repository trait.
///
/// Every read treats soft-deleted rows as absent.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> ShopResult<Option<User>>;

    /// Finds a user by mobile number.
    async fn find_by_mobile(&self, mobile: &str) -> ShopResult<Option<User>>;

    /// Returns one page of users ordered by id ascending, with the total
    /// taken from a separate count.
    async fn find_all(&self, page: PageRequest) -> ShopResult<Page<User>>;

    /// Counts all live users.
    async fn count(&self) -> ShopResult<u64>;

    /// Inserts a new user and returns the persisted row.
    ///
    /// A duplicate mobile fails with `ShopError::AlreadyExists`.
    async fn insert(&self, user: &NewUser) -> ShopResult<User>;

    /// Persists the mutable profile fields of an existing user.
    async fn update(&self, user: &User) -> ShopResult<()>;
}
