//! Network-shaped token validation: the endpoint other services call and the
//! client they call it with.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod validated_identity;

pub use client::{DEFAULT_REQUEST_TIMEOUT, ValidationClient};
pub use endpoint::{router, serve};
pub use error::{Result, RpcError};
pub use validated_identity::ValidatedIdentity;

#[cfg(test)]
mod tests;
