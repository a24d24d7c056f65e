use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, HashingConfig, LoggingConfig, RpcConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub rpc: RpcConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub hashing: HashingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TG_CONFIG_DIR env var, else use ./.tg/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TG_CONFIG_DIR env var > ./.tg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.rpc.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.hashing.validate()?;

        if self.rpc.port != 0
            && self.server.port == self.rpc.port
            && self.server.host == self.rpc.host
        {
            return Err(ConfigError::config(format!(
                "server and rpc cannot share {}:{}",
                self.rpc.host, self.rpc.port
            )));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory log files are written to, inside the config directory
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Get HTTP API bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get validation RPC bind address as string.
    pub fn rpc_bind_addr(&self) -> String {
        format!("{}:{}", self.rpc.host, self.rpc.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  rpc: {}:{} (timeout {}s)",
            self.rpc.host, self.rpc.port, self.rpc.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256, secret {}, access={}, refresh={}, leeway={}s, store_timeout={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.access_token_ttl,
            self.auth.refresh_token_ttl,
            self.auth.leeway_secs,
            self.auth.store_timeout_secs
        );
        info!(
            "  hashing: argon2id m={}KiB t={} p={}",
            self.hashing.memory_kib, self.hashing.iterations, self.hashing.parallelism
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TG_SERVER_PORT", &mut self.server.port);

        // RPC
        Self::apply_env_string("TG_RPC_HOST", &mut self.rpc.host);
        Self::apply_env_parse("TG_RPC_PORT", &mut self.rpc.port);
        Self::apply_env_parse(
            "TG_RPC_REQUEST_TIMEOUT_SECS",
            &mut self.rpc.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("TG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("TG_AUTH_ACCESS_TOKEN_TTL", &mut self.auth.access_token_ttl);
        Self::apply_env_string("TG_AUTH_REFRESH_TOKEN_TTL", &mut self.auth.refresh_token_ttl);
        Self::apply_env_parse("TG_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_parse(
            "TG_AUTH_STORE_TIMEOUT_SECS",
            &mut self.auth.store_timeout_secs,
        );

        // Hashing
        Self::apply_env_parse("TG_HASH_MEMORY_KIB", &mut self.hashing.memory_kib);
        Self::apply_env_parse("TG_HASH_ITERATIONS", &mut self.hashing.iterations);
        Self::apply_env_parse("TG_HASH_PARALLELISM", &mut self.hashing.parallelism);

        // Logging
        Self::apply_env_parse("TG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored and the previous value kept.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
