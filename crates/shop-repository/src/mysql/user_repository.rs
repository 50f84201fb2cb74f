//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shop_core::{Gender, NewUser, Page, PageRequest, ShopError, ShopResult, User, UserId, UserRole};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

const USER_COLUMNS: &str = "id, mobile, password, nick_name, birthday, gender, role, created_at, updated_at";

/// MySQL user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: u64,
    mobile: String,
    password: String,
    nick_name: String,
    birthday: Option<DateTime<Utc>>,
    gender: String,
    role: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = ShopError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let gender = row
            .gender
            .parse::<Gender>()
            .map_err(|e| ShopError::Internal(format!("Invalid gender in database for user {}: {e}", row.id)))?;

        Ok(User {
            id: UserId::new(row.id),
            mobile: row.mobile,
            password: row.password,
            nick_name: row.nick_name,
            birthday: row.birthday,
            gender,
            role: UserRole::try_from(row.role)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> ShopResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let sql = format!("SELECT {USER_COLUMNS} FROM `user` WHERE id = ? AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_mobile(&self, mobile: &str) -> ShopResult<Option<User>> {
        debug!("Finding user by mobile: {}", mobile);

        let sql = format!("SELECT {USER_COLUMNS} FROM `user` WHERE mobile = ? AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(mobile)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self, page: PageRequest) -> ShopResult<Page<User>> {
        debug!("Finding all users, page: {}, size: {}", page.page, page.size);

        let total = self.count().await?;

        let sql = format!(
            "SELECT {USER_COLUMNS} FROM `user` WHERE deleted_at IS NULL ORDER BY id ASC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.inner())
            .await?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(users, total))
    }

    async fn count(&self) -> ShopResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM `user` WHERE deleted_at IS NULL")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert(&self, user: &NewUser) -> ShopResult<User> {
        debug!("Inserting user with mobile: {}", user.mobile);

        let now = Utc::now();

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r"
            INSERT INTO `user` (mobile, password, nick_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&user.mobile)
        .bind(&user.password)
        .bind(&user.nick_name)
        .bind(now)
        .bind(now)
        .execute(self.pool.inner())
        .await?;

        let id = UserId::new(result.last_insert_id());
        info!("Inserted user {}", id);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::Internal(format!("Failed to fetch inserted user {id}")))
    }

    async fn update(&self, user: &User) -> ShopResult<()> {
        debug!("Updating user: {}", user.id);

        let result = sqlx::query(
            r"
            UPDATE `user`
            SET nick_name = ?, birthday = ?, gender = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            ",
        )
        .bind(&user.nick_name)
        .bind(user.birthday)
        .bind(user.gender.as_str())
        .bind(user.updated_at)
        .bind(user.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        // Matched rows, not changed rows: sqlx sets CLIENT_FOUND_ROWS.
        if result.rows_affected() == 0 {
            return Err(ShopError::not_found("User", user.id));
        }

        Ok(())
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
