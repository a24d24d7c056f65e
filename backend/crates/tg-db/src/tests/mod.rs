mod stores;

use tg_core::UserIdentity;

pub(crate) fn test_identity(email: &str) -> UserIdentity {
    UserIdentity::new(
        email.to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
    )
}
