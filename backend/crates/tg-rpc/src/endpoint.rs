//! Validation RPC endpoint.
//!
//! One POST route taking a protobuf `TokenRequest` and answering a protobuf
//! `TokenResponse`. A token that fails validation is an ordinary answer
//! (200, `valid = false`); only an unreadable request (400) or a failure on
//! our side (500) is reported at the HTTP level.

use tg_auth::{AuthError, TokenValidator};
use tg_proto::{PROTOBUF_CONTENT_TYPE, TokenRequest, TokenResponse, VALIDATE_TOKEN_PATH};

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use bytes::Bytes;
use log::{debug, error, info, warn};
use prost::Message as ProstMessage;
use tokio::net::TcpListener;

/// Router serving the validation RPC
pub fn router(validator: Arc<TokenValidator>) -> Router {
    Router::new()
        .route(VALIDATE_TOKEN_PATH, post(validate_token))
        .with_state(validator)
}

/// Serve the validation RPC on `listener` until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    validator: Arc<TokenValidator>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Validation RPC listening on {}", addr);
    }

    axum::serve(listener, router(validator))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn validate_token(State(validator): State<Arc<TokenValidator>>, body: Bytes) -> Response {
    let request = match TokenRequest::decode(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Undecodable TokenRequest: {}", e);
            return (StatusCode::BAD_REQUEST, "malformed TokenRequest").into_response();
        }
    };

    let response = match validator.verify(&request.token) {
        Ok(verified) => TokenResponse::valid(verified.subject.to_string(), verified.email),
        Err(e @ AuthError::Token { .. }) => {
            debug!("Token rejected over RPC: {}", e);
            TokenResponse::invalid(e.to_proto_error())
        }
        Err(e) => {
            error!("Token validation failed internally: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
        }
    };

    (
        [(header::CONTENT_TYPE, PROTOBUF_CONTENT_TYPE)],
        response.encode_to_vec(),
    )
        .into_response()
}
