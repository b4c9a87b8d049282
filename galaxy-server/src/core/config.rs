/// Server configuration
///
/// # Environment variables
///
/// Every entry can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 3001 | HTTP API port |
/// | DATABASE_PATH | ./data/galaxy.db | SQLite database file |
/// | UPLOAD_DIR | ./uploads | Image upload directory |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | daily rolling log files when set |
/// | LOG_JSON | false | JSON log output |
///
/// # Example
///
/// ```ignore
/// PORT=8080 UPLOAD_DIR=/srv/galaxy/uploads cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Directory where uploaded images are stored
    pub upload_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter
    pub log_level: String,
    /// Optional log directory (rolling daily files)
    pub log_dir: Option<String>,
    /// Emit JSON formatted logs
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/galaxy.db".into()),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override paths and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(
        database_path: impl Into<String>,
        upload_dir: impl Into<String>,
        http_port: u16,
    ) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.upload_dir = upload_dir.into();
        config.http_port = http_port;
        config
    }

    /// Whether the server runs in production (controls error detail in
    /// responses)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
