use crate::{TOKEN_TYPE_BEARER, TokenPair};

use googletest::prelude::*;

#[test]
fn given_bearer_pair_when_serialized_then_matches_client_json_shape() {
    let pair = TokenPair::bearer("access".to_string(), "refresh".to_string(), 3600);

    let json = serde_json::to_value(&pair).unwrap();

    assert_that!(json["access_token"].as_str(), some(eq("access")));
    assert_that!(json["refresh_token"].as_str(), some(eq("refresh")));
    assert_that!(json["token_type"].as_str(), some(eq(TOKEN_TYPE_BEARER)));
    assert_that!(json["expires_in"].as_i64(), some(eq(3600)));
}
