//! In-memory user repository.
//!
//! Behaves like the MySQL implementation where callers can observe it:
//! ids are assigned sequentially from 1, mobiles are unique, listing is
//! ordered by id and `update` only writes the profile columns of a row that
//! exists.

use crate::traits::UserRepository;
use async_trait::async_trait;
use chrono::Utc;
use shop_core::{Gender, NewUser, Page, PageRequest, ShopError, ShopResult, User, UserId, UserRole};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    next_id: u64,
    users: BTreeMap<UserId, User>,
}

/// Thread-safe in-memory [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> ShopResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| ShopError::internal("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> ShopResult<Option<User>> {
        Ok(self.state()?.users.get(&id).cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> ShopResult<Option<User>> {
        Ok(self.state()?.users.values().find(|u| u.mobile == mobile).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> ShopResult<Page<User>> {
        let state = self.state()?;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let content = state.users.values().skip(offset).take(limit).cloned().collect();
        Ok(Page::new(content, state.users.len() as u64))
    }

    async fn count(&self) -> ShopResult<u64> {
        Ok(self.state()?.users.len() as u64)
    }

    async fn insert(&self, user: &NewUser) -> ShopResult<User> {
        let mut state = self.state()?;

        if state.users.values().any(|u| u.mobile == user.mobile) {
            return Err(ShopError::already_exists(format!(
                "Duplicate entry '{}' for key 'idx_mobile'",
                user.mobile
            )));
        }

        state.next_id += 1;
        let now = Utc::now();
        let stored = User {
            id: UserId::new(state.next_id),
            mobile: user.mobile.clone(),
            password: user.password.clone(),
            nick_name: user.nick_name.clone(),
            birthday: None,
            gender: Gender::default(),
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        };
        state.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> ShopResult<()> {
        let mut state = self.state()?;

        let stored = state
            .users
            .get_mut(&user.id)
            .ok_or_else(|| ShopError::not_found("User", user.id))?;

        stored.nick_name.clone_from(&user.nick_name);
        stored.birthday = user.birthday;
        stored.gender = user.gender;
        stored.updated_at = user.updated_at;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(&NewUser::new("1", "p", "a")).await.unwrap();
        let second = repo.insert(&NewUser::new("2", "p", "b")).await.unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
        assert_eq!(first.gender, Gender::Male);
        assert_eq!(first.role, UserRole::Customer);
    }

    #[tokio::test]
    async fn test_duplicate_mobile_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&NewUser::new("1", "p", "a")).await.unwrap();

        let result = repo.insert(&NewUser::new("1", "p", "b")).await;
        assert!(matches!(result, Err(ShopError::AlreadyExists(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_windows_by_id() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.insert(&NewUser::new(i.to_string(), "p", "n")).await.unwrap();
        }

        let page = repo.find_all(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.total_elements, 5);
        let ids: Vec<u64> = page.into_iter().map(|u| u.id.into_inner()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_update_ignores_credential_changes() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.insert(&NewUser::new("1", "original", "a")).await.unwrap();

        user.password = "changed".to_string();
        user.update_profile("b".to_string(), None, Gender::Female);
        repo.update(&user).await.unwrap();

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.password, "original");
        assert_eq!(stored.nick_name, "b");
        assert_eq!(stored.gender, Gender::Female);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.insert(&NewUser::new("1", "p", "a")).await.unwrap();
        user.id = UserId::new(99);

        let result = repo.update(&user).await;
        assert!(matches!(result, Err(ShopError::NotFound { .. })));
    }
}
