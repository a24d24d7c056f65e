mod auth_config;
mod config;
mod database_config;
mod error;
mod hashing_config;
mod log_level;
mod logging_config;
mod rpc_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use hashing_config::HashingConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rpc_config::RpcConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "TG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RPC_PORT: u16 = 50051;
const MIN_PORT: u16 = 1024;

const DEFAULT_RPC_REQUEST_TIMEOUT_SECS: u64 = 5;
const MIN_RPC_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_RPC_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "tokengate.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL: &str = "24h";
const DEFAULT_REFRESH_TOKEN_TTL: &str = "168h";
// Keeps `exp` well inside the range a timestamp can represent
const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;
const DEFAULT_LEEWAY_SECS: u64 = 0;
const MAX_LEEWAY_SECS: u64 = 300;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

// Argon2id, OWASP minimum recommendation
const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;
const MIN_HASH_MEMORY_KIB_PER_LANE: u32 = 8;
const MAX_HASH_MEMORY_KIB: u32 = 4 * 1024 * 1024;
const MAX_HASH_ITERATIONS: u32 = 64;
const MAX_HASH_PARALLELISM: u32 = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
