//! User record as held by the credential store.

use crate::UserProfile;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// A registered user. `password_hash` is a self-describing PHC string and is
/// never handed to callers outside the auth core; use [`UserIdentity::profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: Uuid,
    /// Normalized (trimmed, lower-case), unique across the store
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Create a new identity with a fresh id
    pub fn new(email: String, password_hash: String, first_name: String, last_name: String) -> Self {
        let now = now_secs();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at` after a mutation
    pub fn touch(&mut self) {
        self.updated_at = now_secs();
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// Stores keep whole seconds, so in-memory records do too
fn now_secs() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
