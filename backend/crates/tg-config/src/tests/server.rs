use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, RpcConfig, ServerConfig};

use googletest::prelude::*;
use serial_test::serial;

#[test]
fn given_privileged_port_when_validate_then_error() {
    let config = ServerConfig {
        port: 80,
        ..ServerConfig::default()
    };

    assert_that!(
        config.validate(),
        err(displays_as(contains_substring("server.port")))
    );
}

#[test]
fn given_port_zero_when_validate_then_ok() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_rpc_timeout_zero_when_validate_then_error() {
    let config = RpcConfig {
        request_timeout_secs: 0,
        ..RpcConfig::default()
    };

    assert_that!(
        config.validate(),
        err(displays_as(contains_substring("request_timeout_secs")))
    );
}

#[test]
#[serial]
fn given_server_and_rpc_on_same_address_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _port = EnvGuard::set("TG_RPC_PORT", "8080");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(displays_as(contains_substring("cannot share"))));
}

#[test]
#[serial]
fn given_default_config_when_bind_addrs_then_host_and_ports() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("127.0.0.1:8080"));
    assert_that!(config.rpc_bind_addr(), eq("127.0.0.1:50051"));
}
