mod memory_credential_store;
