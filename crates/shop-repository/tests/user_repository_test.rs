//! Integration tests for MySqlUserRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::TestDatabase;
use shop_core::{Gender, NewUser, PageRequest, ShopError, UserId, UserRole};
use shop_repository::{MySqlUserRepository, UserRepository};

fn new_user(mobile: &str, nick_name: &str) -> NewUser {
    NewUser::new(mobile, "$pbkdf2-sha512$abcdefghij$00", nick_name)
}

#[tokio::test]
async fn test_insert_applies_storage_defaults() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let user = repo
        .insert(&new_user("15999962510", "bobby0"))
        .await
        .expect("Failed to insert user");

    assert!(user.id.into_inner() > 0);
    assert_eq!(user.mobile, "15999962510");
    assert_eq!(user.nick_name, "bobby0");
    assert_eq!(user.gender, Gender::Male);
    assert_eq!(user.role, UserRole::Customer);
    assert!(user.birthday.is_none());
}

#[tokio::test]
async fn test_find_by_id_and_mobile() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let inserted = repo.insert(&new_user("15999962511", "bobby1")).await.unwrap();

    let by_id = repo
        .find_by_id(inserted.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(by_id, inserted);

    let by_mobile = repo
        .find_by_mobile("15999962511")
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(by_mobile.id, inserted.id);
}

#[tokio::test]
async fn test_missing_keys_return_none() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    assert!(repo.find_by_id(UserId::new(999_999)).await.unwrap().is_none());
    assert!(repo.find_by_mobile("10000000000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_mobile_is_already_exists() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    repo.insert(&new_user("15999962512", "first")).await.unwrap();
    let result = repo.insert(&new_user("15999962512", "second")).await;

    assert!(matches!(result, Err(ShopError::AlreadyExists(_))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_all_orders_by_id_and_counts_total() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    for i in 0..5 {
        repo.insert(&new_user(&format!("1599996252{i}"), &format!("bobby{i}")))
            .await
            .unwrap();
    }

    let first = repo.find_all(PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.len(), 2);
    assert!(first.content[0].id < first.content[1].id);
    assert_eq!(first.content[0].mobile, "15999962520");

    let last = repo.find_all(PageRequest::new(3, 2)).await.unwrap();
    assert_eq!(last.total_elements, 5);
    assert_eq!(last.len(), 1);
    assert_eq!(last.content[0].mobile, "15999962524");

    let beyond = repo.find_all(PageRequest::new(10, 2)).await.unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[tokio::test]
async fn test_update_writes_profile_fields_only() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let mut user = repo.insert(&new_user("15999962530", "bobby")).await.unwrap();
    let birthday = Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap();
    user.update_profile("new".to_string(), Some(birthday), Gender::Female);
    user.password = "$pbkdf2-sha512$zzzzzzzzzz$11".to_string();

    repo.update(&user).await.expect("Failed to update user");

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.nick_name, "new");
    assert_eq!(found.birthday, Some(birthday));
    assert_eq!(found.gender, Gender::Female);
    assert_eq!(found.password, "$pbkdf2-sha512$abcdefghij$00");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_round_trips_birthday_column_bounds() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let mut user = repo.insert(&new_user("15999962531", "bobby")).await.unwrap();

    user.update_profile("epoch".to_string(), Some(DateTime::<Utc>::UNIX_EPOCH), Gender::Male);
    repo.update(&user).await.expect("Failed to store epoch birthday");
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.birthday, Some(DateTime::<Utc>::UNIX_EPOCH));

    let latest = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(latest.timestamp(), 253_402_300_799);
    user.update_profile("latest".to_string(), Some(latest), Gender::Male);
    repo.update(&user).await.expect("Failed to store latest birthday");
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.birthday, Some(latest));
}

#[tokio::test]
async fn test_update_of_soft_deleted_row_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let mut user = repo.insert(&new_user("15999962532", "bobby")).await.unwrap();

    sqlx::query("UPDATE `user` SET deleted_at = NOW(), is_deleted = 1 WHERE id = ?")
        .bind(user.id.into_inner())
        .execute(db.pool().inner())
        .await
        .unwrap();

    user.update_profile("late".to_string(), None, Gender::Female);
    let result = repo.update(&user).await;
    assert!(matches!(result, Err(ShopError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_without_changes_still_matches_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let user = repo.insert(&new_user("15999962533", "bobby")).await.unwrap();

    repo.update(&user).await.expect("Unchanged update must succeed");
    repo.update(&user).await.expect("Repeated update must succeed");
}

#[tokio::test]
async fn test_soft_deleted_rows_are_invisible() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let kept = repo.insert(&new_user("15999962540", "kept")).await.unwrap();
    let gone = repo.insert(&new_user("15999962541", "gone")).await.unwrap();

    sqlx::query("UPDATE `user` SET deleted_at = NOW(), is_deleted = 1 WHERE id = ?")
        .bind(gone.id.into_inner())
        .execute(db.pool().inner())
        .await
        .unwrap();

    assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
    assert!(repo.find_by_mobile("15999962541").await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 1);

    let page = repo.find_all(PageRequest::first()).await.unwrap();
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, kept.id);
}

#[tokio::test]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    db.pool().health_check().await.expect("Health check failed");
}
