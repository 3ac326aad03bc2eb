//! Client configuration.

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API server.
    pub api_base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ClientConfig {
    /// Create ClientConfig from environment variables.
    ///
    /// - `NOTES_API_BASE_URL`: server base URL (default http://localhost:3000)
    /// - `NOTES_CLIENT_TIMEOUT_MS`: request timeout (default 30000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: std::env::var("NOTES_API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout_ms: std::env::var("NOTES_CLIENT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_ms, 30_000);
    }
}
