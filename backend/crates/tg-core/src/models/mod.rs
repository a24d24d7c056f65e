pub mod credentials;
pub mod token_pair;
pub mod user_identity;
pub mod user_profile;
pub mod validation;
