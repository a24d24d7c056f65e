use crate::{RpcError, ValidationClient};

use tg_proto::{Error as ProtoError, PROTOBUF_CONTENT_TYPE, TokenResponse, VALIDATE_TOKEN_PATH};

use googletest::prelude::*;
use prost::Message as ProstMessage;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VALIDATE_TOKEN_PATH))
        .and(header("content-type", PROTOBUF_CONTENT_TYPE))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn protobuf(response: TokenResponse) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(response.encode_to_vec(), PROTOBUF_CONTENT_TYPE)
}

#[test]
fn given_base_url_with_trailing_slash_when_created_then_endpoint_joined_once() {
    let client = ValidationClient::new("http://127.0.0.1:50051/").unwrap();

    assert_that!(
        client.endpoint(),
        eq("http://127.0.0.1:50051/tokengate.auth.v1.AuthService/ValidateToken")
    );
}

#[tokio::test]
async fn given_valid_response_when_validated_then_identity_returned() {
    let subject = Uuid::new_v4();
    let server = server_answering(protobuf(TokenResponse::valid(
        subject.to_string(),
        Some("a@x.com".to_string()),
    )))
    .await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let identity = client.validate("token").await.unwrap();

    assert_that!(identity.subject, eq(subject));
    assert_that!(identity.email, some(eq("a@x.com")));
}

#[tokio::test]
async fn given_valid_response_without_email_when_validated_then_email_absent() {
    let server = server_answering(protobuf(TokenResponse::valid(
        Uuid::new_v4().to_string(),
        None,
    )))
    .await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let identity = client.validate("token").await.unwrap();

    assert_that!(identity.email, none());
}

#[tokio::test]
async fn given_invalid_response_when_validated_then_rejected_with_wire_code() {
    let server = server_answering(protobuf(TokenResponse::invalid(ProtoError {
        code: "token_parsing_failed".to_string(),
        message: "Token is expired".to_string(),
    })))
    .await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let error = client.validate("token").await.unwrap_err();

    assert_that!(error.rejection_code(), some(eq("token_parsing_failed")));
    assert!(matches!(error, RpcError::Rejected { .. }));
}

#[tokio::test]
async fn given_server_error_status_when_validated_then_status_error() {
    let server = server_answering(ResponseTemplate::new(500)).await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let result = client.validate("token").await;

    assert!(matches!(result, Err(RpcError::Status { status: 500, .. })));
}

#[tokio::test]
async fn given_valid_response_with_non_uuid_subject_when_validated_then_protocol_error() {
    let server = server_answering(protobuf(TokenResponse::valid("user-123".to_string(), None))).await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let result = client.validate("token").await;

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}

#[tokio::test]
async fn given_garbage_body_when_validated_then_decode_error() {
    let server = server_answering(
        ResponseTemplate::new(200).set_body_raw(vec![0x0A, 0x05, b'a'], PROTOBUF_CONTENT_TYPE),
    )
    .await;
    let client = ValidationClient::new(&server.uri()).unwrap();

    let result = client.validate("token").await;

    assert!(matches!(result, Err(RpcError::Decode { .. })));
}

#[tokio::test]
async fn given_nothing_listening_when_validated_then_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ValidationClient::new(&format!("http://{}", addr)).unwrap();

    let result = client.validate("token").await;

    assert!(matches!(result, Err(RpcError::Transport { .. })));
}
