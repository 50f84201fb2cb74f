//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserInfo, UserListResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shop_core::{Gender, NewUser, PageRequest, ShopError, ShopResult, UserId, ValidateExt};
use shop_repository::UserRepository;
use shop_security::CredentialCodec;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by a repository and a credential codec.
#[derive(Clone)]
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    credential_codec: Arc<dyn CredentialCodec>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>, credential_codec: Arc<dyn CredentialCodec>) -> Self {
        Self {
            user_repository,
            credential_codec,
        }
    }
}

/// Last second a MySQL `DATETIME` column can hold (9999-12-31 23:59:59 UTC).
const MAX_BIRTHDAY_SECS: u64 = 253_402_300_799;

/// Converts wire epoch seconds into a timestamp the `birthday` column can store.
fn birthday_from_secs(secs: u64) -> ShopResult<DateTime<Utc>> {
    if secs > MAX_BIRTHDAY_SECS {
        return Err(ShopError::validation(format!(
            "birthday: {secs} is after 9999-12-31 23:59:59"
        )));
    }

    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| ShopError::validation(format!("birthday: {secs} is not a representable timestamp")))
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self, page: PageRequest) -> ShopResult<UserListResponse> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);

        let users = self.user_repository.find_all(page).await?;
        Ok(UserListResponse::from(users))
    }

    async fn get_user_by_mobile(&self, mobile: &str) -> ShopResult<UserInfo> {
        debug!("Getting user by mobile: {}", mobile);

        let user = self
            .user_repository
            .find_by_mobile(mobile)
            .await?
            .ok_or_else(|| ShopError::not_found("User", mobile))?;

        Ok(UserInfo::from(user))
    }

    async fn get_user_by_id(&self, id: UserId) -> ShopResult<UserInfo> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::not_found("User", id))?;

        Ok(UserInfo::from(user))
    }

    async fn create_user(&self, request: CreateUserRequest) -> ShopResult<UserInfo> {
        debug!("Creating user with mobile: {}", request.mobile);

        request.validate_request()?;

        // Advisory; the unique index on mobile is authoritative.
        if self.user_repository.find_by_mobile(&request.mobile).await?.is_some() {
            return Err(ShopError::already_exists(format!(
                "User with mobile '{}' already exists",
                request.mobile
            )));
        }

        let password = self.credential_codec.encode(&request.password)?;
        let new_user = NewUser::new(request.mobile, password, request.nick_name);

        let saved_user = self.user_repository.insert(&new_user).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserInfo::from(saved_user))
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> ShopResult<()> {
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::not_found("User", id))?;

        request.validate_request()?;
        let gender = request.gender.parse::<Gender>().map_err(ShopError::Validation)?;
        let birthday = birthday_from_secs(request.birthday)?;

        user.update_profile(request.nick_name, Some(birthday), gender);
        self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(())
    }

    async fn check_password(&self, password: &str, encrypted_password: &str) -> ShopResult<bool> {
        self.credential_codec.verify(password, encrypted_password)
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
