use tg_auth::IdentityService;

/// Shared state for the public HTTP API
#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,
}

impl AppState {
    pub fn new(identity: IdentityService) -> Self {
        Self { identity }
    }
}
