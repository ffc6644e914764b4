use store_client::StoreConfig;

use crate::db::keepalive::KeepaliveMode;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development, staging or production |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | KEEPALIVE_INTERVAL_SECS | 86400 | Scheduled keepalive period, 0 disables |
/// | KEEPALIVE_MODE | upsert | `upsert` marker row or `read` one event id |
/// | LOG_LEVEL | info | Default level when RUST_LOG is unset |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | (unset) | Write daily-rolling log files here |
///
/// Store credentials are read by [`StoreConfig::from_env`].
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 KEEPALIVE_INTERVAL_SECS=0 cargo run -p site-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Scheduled keepalive period (seconds), 0 disables the task
    pub keepalive_interval_secs: u64,
    /// What the keepalive ping does
    pub keepalive_mode: KeepaliveMode,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Remote store connection, `None` when credentials are missing
    pub store: Option<StoreConfig>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        let logging = LogSettings::from_env();
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            keepalive_interval_secs: std::env::var("KEEPALIVE_INTERVAL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(86400),
            keepalive_mode: keepalive_mode_from(std::env::var("KEEPALIVE_MODE").ok()),
            log_level: logging.level,
            log_json: logging.json,
            log_dir: logging.dir,
            store: StoreConfig::from_env(),
        }
    }

    /// Override the port and store connection
    ///
    /// Used by tests
    pub fn with_overrides(http_port: u16, store: Option<StoreConfig>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.store = store;
        config.keepalive_interval_secs = 0;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Logging settings, readable before the subscriber is installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }
}

/// Unset means the default; an unknown value is logged and ignored
fn keepalive_mode_from(raw: Option<String>) -> KeepaliveMode {
    let Some(raw) = raw else {
        return KeepaliveMode::default();
    };
    raw.parse().unwrap_or_else(|e| {
        let fallback = KeepaliveMode::default();
        tracing::warn!(value = %raw, error = %e, fallback = %fallback, "Invalid KEEPALIVE_MODE");
        fallback
    })
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
