pub mod memory_credential_store;
pub mod sqlite_credential_store;
