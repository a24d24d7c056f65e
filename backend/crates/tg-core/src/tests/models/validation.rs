use crate::{MAX_NAME_LENGTH, validate_name};

use googletest::prelude::*;

#[test]
fn given_regular_name_when_validated_then_ok() {
    assert_that!(validate_name("first_name", "Ada"), ok(anything()));
}

#[test]
fn given_blank_name_when_validated_then_error_mentions_field() {
    let result = validate_name("last_name", "   ");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().message(), contains_substring("last_name"));
}

#[test]
fn given_name_over_limit_when_validated_then_error() {
    let name = "a".repeat(MAX_NAME_LENGTH + 1);

    assert_that!(validate_name("first_name", &name), err(anything()));
}
