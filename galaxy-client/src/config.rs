//! Client configuration

/// Client configuration for connecting to the Galaxy server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Log every request/response at debug level
    pub debug: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            debug: false,
        }
    }

    /// Load from environment: API_URL, API_TIMEOUT, API_DEBUG
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
        let mut config = Self::new(base_url);
        if let Some(timeout) = std::env::var("API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config.debug = std::env::var("API_DEBUG")
            .ok()
            .and_then(|d| d.parse().ok())
            .unwrap_or(false);
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Enable request logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
