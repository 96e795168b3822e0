//! Client configuration options.

use std::time::Duration;

use secrecy::SecretString;

use crate::models::Environment;
use crate::Error;

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Default pause between consecutive page requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(250);

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status codes treated as transient unless a [`RetryConfig`] says otherwise.
pub const DEFAULT_RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Configuration for the OpenSea client.
///
/// A `ClientConfig` is built once, moved into [`OpenSeaClient`](crate::OpenSeaClient)
/// and never changed afterwards. Every request issued by that client reads
/// from the same value.
///
/// # Example
///
/// ```
/// use opensea_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_page_size(20)
///     .with_request_delay(Duration::from_millis(500));
/// assert_eq!(config.page_size, 20);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as `X-API-KEY`. May be empty for anonymous calls.
    pub api_key: SecretString,
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Number of records requested per page (`limit`)
    pub page_size: u32,
    /// Pause between consecutive page requests
    pub request_delay: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Upper bound on pages fetched by one paginated call, if any
    pub max_pages: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: Environment::default().api_base_url().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("opensea-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and default values.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads `OPENSEA_API_KEY` (empty if unset) and, when present,
    /// `OPENSEA_BASE_URL`.
    pub fn from_env() -> Self {
        let config = Self::new(std::env::var("OPENSEA_API_KEY").unwrap_or_default());
        match std::env::var("OPENSEA_BASE_URL") {
            Ok(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
            _ => config,
        }
    }

    /// Point the client at a different host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use the base URL of a well-known environment.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.base_url = env.api_base_url().to_string();
        self
    }

    /// Set the number of records requested per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the pause between consecutive page requests.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Cap the number of pages a single paginated call may fetch.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Configuration for opt-in retries of failed requests.
///
/// Retries are disabled by default: every request is attempted exactly
/// once. Raising `max_retries` enables exponential backoff for transport
/// failures and for the status codes listed in `retry_statuses`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial backoff duration
    pub initial_backoff: Duration,
    /// Maximum backoff duration
    pub max_backoff: Duration,
    /// HTTP status codes to retry on
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::no_retry()
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            retry_statuses: DEFAULT_RETRY_STATUSES.to_vec(),
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Calculate the backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_millis =
            (self.initial_backoff.as_millis() as u64).saturating_mul(2u64.saturating_pow(attempt));
        let max_millis = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff_millis.min(max_millis))
    }

    /// Check if a status code should be retried.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Check if an error should be retried under this policy.
    ///
    /// Errors carrying a status are checked against `retry_statuses`; the
    /// rest are retried only when no response was received.
    pub fn should_retry(&self, err: &Error) -> bool {
        match err.status() {
            Some(status) => self.should_retry_status(status),
            None => err.is_transient(),
        }
    }
}
