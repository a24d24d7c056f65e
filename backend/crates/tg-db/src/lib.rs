pub mod connection;
pub mod error;
pub mod stores;

pub use connection::sqlite_pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use stores::memory_credential_store::MemoryCredentialStore;
pub use stores::sqlite_credential_store::SqliteCredentialStore;

#[cfg(test)]
mod tests;
