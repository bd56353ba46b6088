use std::time::Duration;

/// Browser-like user agent; the chart API rejects some default client agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Endpoints and HTTP settings for the Yahoo chart API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooConfig {
    /// Base URL used by the download access method.
    pub download_base: String,
    /// Base URL used by the ticker-history access method.
    pub history_base: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            download_base: "https://query1.finance.yahoo.com".to_string(),
            history_base: "https://query2.finance.yahoo.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl YahooConfig {
    /// Point both access methods at the same base URL.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.download_base.clone_from(&base);
        self.history_base = base;
        self
    }

    /// Override the download base URL.
    #[must_use]
    pub fn with_download_base(mut self, base: impl Into<String>) -> Self {
        self.download_base = base.into();
        self
    }

    /// Override the ticker-history base URL.
    #[must_use]
    pub fn with_history_base(mut self, base: impl Into<String>) -> Self {
        self.history_base = base.into();
        self
    }

    /// Override the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
