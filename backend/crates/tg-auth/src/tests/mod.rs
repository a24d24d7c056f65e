
use crate::{HashingParams, PasswordHasher};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Minimal Argon2 cost so tests stay fast
pub(crate) fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(HashingParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}
