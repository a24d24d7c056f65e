use tg_core::UserIdentity;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    tg_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn create_test_identity(email: &str) -> UserIdentity {
    UserIdentity::new(
        email.to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
    )
}
