use std::time::Duration;

use shared_types::{GENERATE_BIO_PATH, HEALTH_PATH};

/// Backend the UI talks to when served from a dev host.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Generation runs a remote model, hence the long budget.
pub const DEFAULT_GENERATE_TIMEOUT: Duration = Duration::from_millis(200_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend; an empty string means same origin
    pub base_url: String,
    /// Budget for the availability probe
    pub health_timeout: Duration,
    /// Budget for the generation request
    pub generate_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
            generate_timeout: DEFAULT_GENERATE_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout;
        self
    }

    pub fn health_url(&self) -> String {
        self.join(HEALTH_PATH)
    }

    pub fn generate_url(&self) -> String {
        self.join(GENERATE_BIO_PATH)
    }

    /// Human-readable backend location used in connection error messages.
    pub fn endpoint_label(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            "the current origin".to_string()
        } else {
            trimmed.to_string()
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
