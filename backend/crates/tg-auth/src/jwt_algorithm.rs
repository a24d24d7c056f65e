use jsonwebtoken::Algorithm;

/// The only algorithm tokens are signed with and accepted under.
/// Validation compares the header against this, never the other way round.
pub const PINNED_ALGORITHM: Algorithm = Algorithm::HS256;

/// Header `alg` value of [`PINNED_ALGORITHM`]
pub const PINNED_ALGORITHM_NAME: &str = "HS256";
