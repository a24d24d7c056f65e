use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_RPC_PORT,
    DEFAULT_RPC_REQUEST_TIMEOUT_SECS, MAX_RPC_REQUEST_TIMEOUT_SECS, MIN_PORT,
    MIN_RPC_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Token validation RPC listener
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    pub host: String,
    pub port: u16,
    /// Per-request deadline applied by the endpoint and by clients
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_RPC_PORT,
            request_timeout_secs: DEFAULT_RPC_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::rpc(format!(
                "rpc.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::rpc("rpc.host cannot be empty"));
        }

        if !(MIN_RPC_REQUEST_TIMEOUT_SECS..=MAX_RPC_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::rpc(format!(
                "rpc.request_timeout_secs must be {}-{}, got {}",
                MIN_RPC_REQUEST_TIMEOUT_SECS,
                MAX_RPC_REQUEST_TIMEOUT_SECS,
                self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
