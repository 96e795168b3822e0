//! HTTP client implementation for the OpenSea API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::{AssetsService, CollectionsService, OrdersService};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the OpenSea API.
///
/// The client is cheap to clone: clones share the same configuration,
/// connection pool and cancellation token. Resource-specific operations
/// live on the service structs returned by [`assets`](Self::assets),
/// [`collections`](Self::collections) and [`orders`](Self::orders).
///
/// # Example
///
/// ```no_run
/// use opensea_rs::{Address, OpenSeaClient};
///
/// # async fn example() -> opensea_rs::Result<()> {
/// let client = OpenSeaClient::new("your-api-key")?;
///
/// let owner = Address::new("0x3b417FaeE9d2ff636701100891DC2755b5321Cc3");
/// let assets = client.assets().list_all(&owner).await?;
/// println!("{} owns {} assets", owner, assets.len());
/// # Ok(())
/// # }
/// ```
pub struct OpenSeaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    base_url: String,
    headers: HeaderMap,
    pub(crate) cancellation_token: CancellationToken,
}

impl OpenSeaClient {
    /// Create a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`] or [`Error::Config`] if the base URL is
    /// not an absolute `http(s)` URL, [`Error::Config`] if the page size is
    /// zero, and [`Error::InvalidInput`] if the API key is not a valid
    /// header value. No request is made in any of these cases.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;

        if config.page_size == 0 {
            return Err(Error::Config("page size must be greater than zero".to_string()));
        }

        let headers = build_headers(&config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        tracing::debug!(base_url = %base_url, page_size = config.page_size, "Created OpenSea client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                base_url,
                headers,
                cancellation_token: CancellationToken::new(),
            }),
        })
    }

    /// Get the assets service.
    pub fn assets(&self) -> AssetsService {
        AssetsService::new(self.inner.clone())
    }

    /// Get the collections service.
    pub fn collections(&self) -> CollectionsService {
        CollectionsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Cancel every paginated fetch running on this client or its clones.
    ///
    /// Cancelled fetches return [`Error::Cancelled`]. The client cannot
    /// start new paginated fetches afterwards; create a new one instead.
    pub fn cancel_all_requests(&self) {
        self.inner.cancellation_token.cancel();
    }

    /// The token cancelled by [`cancel_all_requests`](Self::cancel_all_requests).
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.cancellation_token
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "base URL must use http or https, got {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::Config(format!("base URL has no host: {}", raw)));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn build_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
        .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
    api_key.set_sensitive(true);

    headers.insert(HeaderName::from_static("x-api-key"), api_key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

impl ClientInner {
    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and decode the body.
    pub(crate) async fn get<T>(&self, path: &str, decode: fn(&[u8]) -> Result<T>) -> Result<T> {
        let url = self.url(path);
        let body = self
            .send_with_retry(path, || self.http.get(url.as_str()))
            .await?;
        decode(&body)
    }

    /// Make a GET request with query parameters and decode the body.
    pub(crate) async fn get_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        decode: fn(&[u8]) -> Result<T>,
    ) -> Result<T>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let body = self
            .send_with_retry(path, || self.http.get(url.as_str()).query(query))
            .await?;
        decode(&body)
    }

    /// Send a request, retrying according to the configured policy.
    ///
    /// With the default policy the request is sent exactly once.
    async fn send_with_retry<F>(&self, path: &str, build: F) -> Result<Vec<u8>>
    where
        F: Fn() -> RequestBuilder,
    {
        let retry = &self.config.retry;
        let mut attempt = 0;

        loop {
            match self.send_once(build()).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < retry.max_retries && retry.should_retry(&err) => {
                    let backoff = match &err {
                        Error::RateLimited { retry_after_secs } => retry
                            .backoff_for_attempt(attempt)
                            .max(std::time::Duration::from_secs(*retry_after_secs))
                            .min(retry.max_backoff),
                        _ => retry.backoff_for_attempt(attempt),
                    };
                    attempt += 1;
                    tracing::warn!(
                        path,
                        attempt,
                        max_retries = retry.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => {
                    tracing::error!(path, error = %err, "Request failed");
                    return Err(err);
                }
            }
        }
    }

    /// Execute one request and read its body.
    async fn send_once(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response.bytes().await.map_err(transport_error)?.to_vec();

        if status.is_success() {
            return Ok(body);
        }

        let json: Value = serde_json::from_slice(&body).unwrap_or_default();

        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimited {
                retry_after_secs: retry_after.unwrap_or(60),
            }),
            StatusCode::NOT_FOUND => {
                let message = json
                    .get("detail")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Resource not found")
                    .to_string();
                Err(Error::NotFound(message))
            }
            _ => Err(Error::from_api_response(status.as_u16(), json)),
        }
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::Http(err)
    }
}

impl Clone for OpenSeaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for OpenSeaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSeaClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
