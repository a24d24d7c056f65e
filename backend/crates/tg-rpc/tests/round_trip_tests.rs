use tg_auth::{TokenIssuer, TokenValidator};
use tg_rpc::{RpcError, ValidationClient};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use uuid::Uuid;

const SECRET: &[u8] = b"round-trip-secret-at-least-32-bytes";

struct RunningEndpoint {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

async fn start_endpoint() -> RunningEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, stopped) = oneshot::channel::<()>();
    let validator = Arc::new(TokenValidator::with_hs256(SECRET));

    let handle = tokio::spawn(tg_rpc::serve(listener, validator, async move {
        let _ = stopped.await;
    }));

    RunningEndpoint {
        base_url: format!("http://{}", addr),
        shutdown,
        handle,
    }
}

#[tokio::test]
async fn given_issued_token_when_validated_over_tcp_then_subject_round_trips() {
    // Given: an endpoint on an ephemeral port and a token it should accept
    let endpoint = start_endpoint().await;
    let subject = Uuid::new_v4();
    let token = TokenIssuer::with_hs256(SECRET)
        .issue_token(subject, Some("a@x.com".to_string()), Duration::from_secs(60))
        .unwrap();
    let client = ValidationClient::new(&endpoint.base_url).unwrap();

    // When
    let identity = client.validate(&token).await.unwrap();

    // Then
    assert_that!(identity.subject, eq(subject));
    assert_that!(identity.email, some(eq("a@x.com")));

    endpoint.shutdown.send(()).unwrap();
    endpoint.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn given_empty_token_when_validated_over_tcp_then_rejected_invalid_token() {
    let endpoint = start_endpoint().await;
    let client = ValidationClient::new(&endpoint.base_url).unwrap();

    let error = client.validate("").await.unwrap_err();

    assert!(matches!(error, RpcError::Rejected { .. }));
    assert_that!(error.rejection_code(), some(eq("invalid_token")));
}

#[tokio::test]
async fn given_shared_client_when_used_concurrently_then_every_call_succeeds() {
    let endpoint = start_endpoint().await;
    let issuer = TokenIssuer::with_hs256(SECRET);
    let client = ValidationClient::new(&endpoint.base_url).unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let subject = Uuid::new_v4();
        let token = issuer
            .issue_token(subject, None, Duration::from_secs(60))
            .unwrap();
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            (subject, client.validate(&token).await)
        }));
    }

    for handle in handles {
        let (subject, result) = handle.await.unwrap();
        assert_that!(result.unwrap().subject, eq(subject));
    }
}
