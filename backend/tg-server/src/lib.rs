pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, refresh, register},
        login_request::LoginRequest,
        refresh_request::RefreshRequest,
        register_request::RegisterRequest,
    },
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    extractors::authenticated_user::AuthenticatedUser,
    user::profile::get_profile,
};
pub use app_state::AppState;
pub use bootstrap::{Services, build_services};
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
