//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserInfo, UserListResponse};
use async_trait::async_trait;
use shop_core::{PageRequest, ShopResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users ordered by id, with the total count of live users.
    async fn list_users(&self, page: PageRequest) -> ShopResult<UserListResponse>;

    /// Gets a user by mobile number.
    async fn get_user_by_mobile(&self, mobile: &str) -> ShopResult<UserInfo>;

    /// Gets a user by ID.
    async fn get_user_by_id(&self, id: UserId) -> ShopResult<UserInfo>;

    /// Creates a new user with an encoded password.
    async fn create_user(&self, request: CreateUserRequest) -> ShopResult<UserInfo>;

    /// Overwrites nickname, birthday and gender of an existing user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> ShopResult<()>;

    /// Checks a plaintext password against a composite credential.
    async fn check_password(&self, password: &str, encrypted_password: &str) -> ShopResult<bool>;
}
