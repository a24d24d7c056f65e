use crate::ApiError;

use tg_auth::{AuthError, FailureReason};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_email_exists_when_rendered_then_409() {
    let (status, json) = render(AuthError::EmailExists { location: here() }.into()).await;

    assert_that!(status, eq(StatusCode::CONFLICT));
    assert_that!(json["error"]["code"].as_str(), some(eq("EMAIL_EXISTS")));
}

#[tokio::test]
async fn given_unknown_user_and_wrong_password_when_rendered_then_indistinguishable() {
    let (unknown_status, unknown) =
        render(AuthError::UserNotFound { location: here() }.into()).await;
    let (wrong_status, wrong) =
        render(AuthError::InvalidCredentials { location: here() }.into()).await;

    assert_that!(unknown_status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(wrong_status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(unknown, eq(&wrong));
    assert_that!(
        unknown["error"]["code"].as_str(),
        some(eq("INVALID_CREDENTIALS"))
    );
}

#[tokio::test]
async fn given_expired_token_when_rendered_then_401_token_expired() {
    let (status, json) = render(AuthError::token(FailureReason::Expired).into()).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"]["code"].as_str(), some(eq("TOKEN_EXPIRED")));
    assert_that!(json["error"]["message"].as_str(), some(eq("Token is expired")));
}

#[tokio::test]
async fn given_invalid_input_when_rendered_then_400_with_field() {
    let error = AuthError::invalid_input("password", "password must be at least 8 characters");

    let (status, json) = render(error.into()).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"].as_str(), some(eq("password")));
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_without_details() {
    let error = AuthError::internal("connection refused to /var/db/users.db");

    let (status, json) = render(error.into()).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(eq("Internal server error"))
    );
    assert_that!(json["error"].get("field"), none());
}
