use std::str::FromStr;

/// Which storage backend the server persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// PostgreSQL, reached through `DATABASE_URL`.
    Db,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "db" | "postgres" => Ok(StorageKind::Db),
            "memory" | "file" => Ok(StorageKind::Memory),
            other => Err(format!("unknown storage type '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Storage backend (default: in-memory).
    pub storage: StorageKind,
    /// PostgreSQL connection string. Required when `storage` is [`StorageKind::Db`].
    pub database_url: Option<String>,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins; `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HBNB_API_HOST`        | `0.0.0.0` |
    /// | `HBNB_API_PORT`        | `5000`    |
    /// | `HBNB_TYPE_STORAGE`    | `memory`  |
    /// | `DATABASE_URL`         | (none)    |
    /// | `DB_MAX_CONNECTIONS`   | `20`      |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HBNB_API_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("HBNB_API_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .expect("HBNB_API_PORT must be a valid u16");

        let storage: StorageKind = var("HBNB_TYPE_STORAGE")
            .unwrap_or_else(|| "memory".into())
            .parse()
            .unwrap_or_else(|e| panic!("HBNB_TYPE_STORAGE is invalid: {e}"));

        let database_url = var("DATABASE_URL").filter(|url| !url.is_empty());
        if storage == StorageKind::Db && database_url.is_none() {
            panic!("DATABASE_URL must be set when HBNB_TYPE_STORAGE=db");
        }

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            storage,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
