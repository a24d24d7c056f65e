use crate::{Credentials, normalize_email};

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_with_spaces_when_normalized_then_trimmed_and_lowercased() {
    assert_that!(normalize_email("  A@X.Com "), eq("a@x.com"));
}

#[test]
fn given_valid_credentials_when_validated_then_ok() {
    let credentials = Credentials::new("a@x.com", "Password123!");

    assert_that!(credentials.validate(), ok(anything()));
}

#[test]
fn given_email_without_at_when_validated_then_error_on_email_field() {
    let credentials = Credentials::new("invalid-email", "Password123!");

    let result = credentials.validate();

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().field(), eq("email"));
}

#[test]
fn given_email_with_two_ats_when_validated_then_error() {
    let credentials = Credentials::new("a@b@x.com", "Password123!");

    assert_that!(credentials.validate(), err(anything()));
}

#[test]
fn given_email_without_domain_dot_when_validated_then_error() {
    let credentials = Credentials::new("a@localhost", "Password123!");

    assert_that!(credentials.validate(), err(anything()));
}

#[test]
fn given_short_password_when_validated_then_error_on_password_field() {
    let credentials = Credentials::new("a@x.com", "123");

    let result = credentials.validate();

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert_that!(error.field(), eq("password"));
    assert_that!(error.message(), contains_substring("at least 8"));
}

#[test]
fn given_overlong_password_when_validated_then_error() {
    let credentials = Credentials::new("a@x.com", "x".repeat(crate::MAX_PASSWORD_LENGTH + 1));

    assert_that!(credentials.validate(), err(anything()));
}

#[test]
fn given_credentials_when_debug_formatted_then_password_is_redacted() {
    let credentials = Credentials::new("a@x.com", "Password123!");

    let debug = format!("{:?}", credentials);

    assert_that!(debug, contains_substring("<redacted>"));
    assert_that!(debug, not(contains_substring("Password123!")));
}
