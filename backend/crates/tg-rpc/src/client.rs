use crate::{Result as RpcErrorResult, RpcError, ValidatedIdentity};

use tg_proto::{PROTOBUF_CONTENT_TYPE, TokenRequest, TokenResponse, VALIDATE_TOKEN_PATH};

use std::time::Duration;

use log::debug;
use prost::Message as ProstMessage;
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

/// Client for the validation RPC.
///
/// Holds one keep-alive connection pool; clones share it, so build one per
/// process and clone it into callers. Calls are never retried.
#[derive(Clone)]
pub struct ValidationClient {
    endpoint: String,
    client: ReqwestClient,
}

impl ValidationClient {
    /// # Arguments
    /// * `base_url` - Endpoint origin (e.g., "http://127.0.0.1:50051")
    pub fn new(base_url: &str) -> RpcErrorResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> RpcErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .tcp_keepalive(TCP_KEEPALIVE)
            .build()?;

        Ok(Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), VALIDATE_TOKEN_PATH),
            client,
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint whether `token` is valid.
    ///
    /// A refused token is `RpcError::Rejected` carrying the wire code.
    pub async fn validate(&self, token: &str) -> RpcErrorResult<ValidatedIdentity> {
        let request = TokenRequest {
            token: token.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, PROTOBUF_CONTENT_TYPE)
            .body(request.encode_to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let reply = TokenResponse::decode(body)?;

        let identity = ValidatedIdentity::try_from(reply)?;
        debug!("Token validated for {}", identity.subject);
        Ok(identity)
    }
}
