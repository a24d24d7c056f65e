use crate::UserIdentity;

use googletest::prelude::*;

fn identity() -> UserIdentity {
    UserIdentity::new(
        "a@x.com".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$ZGlnZXN0".to_string(),
        "Test".to_string(),
        "User".to_string(),
    )
}

#[test]
fn given_new_identity_then_timestamps_match_and_id_is_v4() {
    let user = identity();

    assert_that!(user.created_at, eq(user.updated_at));
    assert_that!(user.id.get_version_num(), eq(4));
}

#[test]
fn given_two_new_identities_then_ids_differ() {
    assert_that!(identity().id, not(eq(identity().id)));
}

#[test]
fn given_identity_when_touched_then_updated_at_moves_forward() {
    let mut user = identity();
    let before = user.updated_at;

    user.touch();

    assert_that!(user.updated_at, ge(before));
    assert_that!(user.created_at, eq(before));
}

#[test]
fn given_identity_when_profiled_then_serialized_profile_has_no_password_hash() {
    let user = identity();

    let json = serde_json::to_value(user.profile()).unwrap();

    assert_that!(json["email"].as_str(), some(eq("a@x.com")));
    assert_that!(json.get("password_hash"), none());
    assert_that!(json.to_string(), not(contains_substring("argon2")));
}

#[test]
fn given_new_or_touched_identity_then_timestamps_have_whole_seconds() {
    let mut user = identity();

    assert_that!(user.created_at.timestamp_subsec_nanos(), eq(0));

    user.touch();

    assert_that!(user.updated_at.timestamp_subsec_nanos(), eq(0));
}
