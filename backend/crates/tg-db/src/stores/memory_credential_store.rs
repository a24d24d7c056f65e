//! Process-local credential store.
//!
//! Used by tests and by deployments that accept losing every account on
//! restart. Writers are serialized by one `RwLock` over both maps, so the
//! email uniqueness check and the insert are a single atomic step.

use tg_core::{CredentialStore, StoreError, StoreResult, UserIdentity, normalize_email};

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    by_id: HashMap<Uuid, UserIdentity>,
    id_by_email: HashMap<String, Uuid>,
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    tables: RwLock<Tables>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create(&self, user: &UserIdentity) -> StoreResult<()> {
        let email = normalize_email(&user.email);
        let mut tables = self.tables.write().await;

        if tables.id_by_email.contains_key(&email) {
            return Err(StoreError::duplicate_email(email));
        }
        if tables.by_id.contains_key(&user.id) {
            return Err(StoreError::internal(format!(
                "user id {} already present",
                user.id
            )));
        }

        tables.id_by_email.insert(email, user.id);
        tables.by_id.insert(user.id, user.clone());
        debug!("Stored user {}", user.id);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<UserIdentity> {
        self.tables
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.to_string()))
    }

    async fn get_by_email(&self, email: &str) -> StoreResult<UserIdentity> {
        let email = normalize_email(email);
        let tables = self.tables.read().await;

        tables
            .id_by_email
            .get(&email)
            .and_then(|id| tables.by_id.get(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(email))
    }

    async fn update(&self, user: &UserIdentity) -> StoreResult<()> {
        let email = normalize_email(&user.email);
        let mut tables = self.tables.write().await;

        let previous_email = match tables.by_id.get(&user.id) {
            Some(existing) => normalize_email(&existing.email),
            None => return Err(StoreError::not_found(user.id.to_string())),
        };

        if previous_email != email {
            if tables.id_by_email.contains_key(&email) {
                return Err(StoreError::duplicate_email(email));
            }
            tables.id_by_email.remove(&previous_email);
            tables.id_by_email.insert(email, user.id);
        }

        tables.by_id.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        let removed = tables
            .by_id
            .remove(&id)
            .ok_or_else(|| StoreError::not_found(id.to_string()))?;
        tables.id_by_email.remove(&normalize_email(&removed.email));
        Ok(())
    }
}
