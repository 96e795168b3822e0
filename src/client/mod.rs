//! HTTP client and pagination for the OpenSea API.
//!
//! This module provides the main entry point [`OpenSeaClient`].
//!
//! # Example
//!
//! ```no_run
//! use opensea_rs::{ClientConfig, CollectionSlug, OpenSeaClient};
//!
//! # async fn example() -> opensea_rs::Result<()> {
//! let client = OpenSeaClient::with_config(ClientConfig::from_env())?;
//!
//! let collection = client
//!     .collections()
//!     .get(&CollectionSlug::new("boredapeyachtclub"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{
    ClientConfig, RetryConfig, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_DELAY, DEFAULT_RETRY_STATUSES,
    DEFAULT_TIMEOUT,
};
pub use http::OpenSeaClient;
pub use paginated::{PageRequest, PaginatedStream, Paginator};
pub(crate) use http::ClientInner;
