//! Wiring from validated configuration to the auth core

use crate::error::Result as ServerErrorResult;

use tg_auth::{
    HashingParams, IdentityService, PasswordHasher, TokenIssuer, TokenLifetimes, TokenValidator,
};
use tg_config::Config;
use tg_core::CredentialStore;

use std::sync::Arc;

use log::info;

/// Everything the two listeners share
pub struct Services {
    pub identity: IdentityService,
    pub validator: Arc<TokenValidator>,
}

/// Build the identity service on top of `store`. Expects `config.validate()`
/// to have passed.
pub fn build_services(
    config: &Config,
    store: Arc<dyn CredentialStore>,
) -> ServerErrorResult<Services> {
    let secret = config.auth.jwt_secret()?;

    let hasher = PasswordHasher::new(HashingParams {
        memory_kib: config.hashing.memory_kib,
        iterations: config.hashing.iterations,
        parallelism: config.hashing.parallelism,
    })?;
    let issuer = TokenIssuer::with_hs256(secret);
    let validator =
        Arc::new(TokenValidator::with_hs256(secret).with_leeway(config.auth.leeway_secs));

    let lifetimes = TokenLifetimes {
        access: config.auth.access_ttl()?,
        refresh: config.auth.refresh_ttl()?,
    };

    let mut identity = IdentityService::new(
        store,
        Arc::new(hasher),
        Arc::new(issuer),
        Arc::clone(&validator),
        lifetimes,
    );
    if let Some(timeout) = config.auth.store_timeout() {
        identity = identity.with_store_timeout(timeout);
    }

    info!("Identity service ready ({})", validator.algorithm());
    Ok(Services {
        identity,
        validator,
    })
}
