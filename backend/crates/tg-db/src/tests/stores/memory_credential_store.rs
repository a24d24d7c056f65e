use crate::MemoryCredentialStore;
use crate::tests::test_identity;

use tg_core::{CredentialStore, StoreError};

use std::sync::Arc;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_user_when_fetched_by_id_and_email_then_found() {
    let store = MemoryCredentialStore::new();
    let user = test_identity("a@x.com");

    store.create(&user).await.unwrap();

    assert_that!(store.get_by_id(user.id).await.unwrap(), eq(&user));
    assert_that!(store.get_by_email("A@X.COM").await.unwrap(), eq(&user));
}

#[tokio::test]
async fn given_existing_email_when_created_again_then_duplicate_email() {
    let store = MemoryCredentialStore::new();
    store.create(&test_identity("a@x.com")).await.unwrap();

    let result = store.create(&test_identity("a@x.com")).await;

    assert!(matches!(result, Err(StoreError::DuplicateEmail { .. })));
    assert_that!(store.len().await, eq(1));
}

#[tokio::test]
async fn given_unknown_id_when_fetched_then_not_found() {
    let store = MemoryCredentialStore::new();

    let result = store.get_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn given_unknown_email_when_fetched_then_not_found() {
    let store = MemoryCredentialStore::new();

    let result = store.get_by_email("nobody@x.com").await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn given_user_when_email_updated_then_old_email_released() {
    let store = MemoryCredentialStore::new();
    let mut user = test_identity("a@x.com");
    store.create(&user).await.unwrap();

    user.email = "b@x.com".to_string();
    user.touch();
    store.update(&user).await.unwrap();

    assert!(matches!(
        store.get_by_email("a@x.com").await,
        Err(StoreError::NotFound { .. })
    ));
    assert_that!(store.get_by_email("b@x.com").await.unwrap().id, eq(user.id));
    store.create(&test_identity("a@x.com")).await.unwrap();
}

#[tokio::test]
async fn given_two_users_when_one_takes_others_email_then_duplicate_email() {
    let store = MemoryCredentialStore::new();
    store.create(&test_identity("a@x.com")).await.unwrap();
    let mut other = test_identity("b@x.com");
    store.create(&other).await.unwrap();

    other.email = "a@x.com".to_string();
    let result = store.update(&other).await;

    assert!(matches!(result, Err(StoreError::DuplicateEmail { .. })));
}

#[tokio::test]
async fn given_missing_user_when_updated_then_not_found() {
    let store = MemoryCredentialStore::new();

    let result = store.update(&test_identity("a@x.com")).await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn given_user_when_deleted_then_gone_and_email_reusable() {
    let store = MemoryCredentialStore::new();
    let user = test_identity("a@x.com");
    store.create(&user).await.unwrap();

    store.delete(user.id).await.unwrap();

    assert_that!(store.is_empty().await, eq(true));
    assert!(matches!(
        store.delete(user.id).await,
        Err(StoreError::NotFound { .. })
    ));
    store.create(&test_identity("a@x.com")).await.unwrap();
}

#[tokio::test]
async fn given_concurrent_creates_for_same_email_then_one_wins() {
    let store = Arc::new(MemoryCredentialStore::new());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create(&test_identity("race@x.com")).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }
    assert_that!(created, eq(1));
    assert_that!(store.len().await, eq(1));
}
