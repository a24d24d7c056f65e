mod credentials;
mod token_pair;
mod user_identity;
mod validation;
