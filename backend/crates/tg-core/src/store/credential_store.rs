use crate::{StoreResult, UserIdentity};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence capability set the auth core depends on.
///
/// Implementations must enforce email uniqueness themselves (including under
/// concurrent `create` calls) and report it as [`crate::StoreError::DuplicateEmail`].
/// Emails passed in are already normalized.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create(&self, identity: &UserIdentity) -> StoreResult<()>;

    async fn get_by_id(&self, id: Uuid) -> StoreResult<UserIdentity>;

    async fn get_by_email(&self, email: &str) -> StoreResult<UserIdentity>;

    /// Replace the stored record with the same id. `NotFound` if absent,
    /// `DuplicateEmail` if the new email belongs to another identity.
    async fn update(&self, identity: &UserIdentity) -> StoreResult<()>;

    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
