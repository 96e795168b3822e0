//! # opensea-rs
//!
//! An async Rust client for the OpenSea marketplace API.
//!
//! ## Features
//!
//! - **Assets**: list every asset an address owns, paginated with a fixed
//!   delay between requests to stay under the API's rate limits
//! - **Collections**: fetch a collection and its trading statistics by slug
//! - **Orders**: query the order book for a token
//! - **Streaming pagination**: consume large listings lazily as a `Stream`
//! - **Cancellation**: abort long paginated fetches through a token
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use opensea_rs::{Address, OpenSeaClient};
//!
//! #[tokio::main]
//! async fn main() -> opensea_rs::Result<()> {
//!     let client = OpenSeaClient::new("your-api-key")?;
//!
//!     let owner = Address::new("0x3b417FaeE9d2ff636701100891DC2755b5321Cc3");
//!     let assets = client.assets().list_all(&owner).await?;
//!     println!("Found {} assets", assets.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use opensea_rs::{ClientConfig, OpenSeaClient, RetryConfig};
//!
//! # fn example() -> opensea_rs::Result<()> {
//! let config = ClientConfig::new("your-api-key")
//!     .with_page_size(20)
//!     .with_request_delay(Duration::from_millis(500))
//!     .with_max_pages(100)
//!     .with_retry(RetryConfig::no_retry().with_max_retries(2));
//!
//! let client = OpenSeaClient::with_config(config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{Address, CollectionSlug, Environment, OrderSide, TokenId};
pub use client::{ClientConfig, OpenSeaClient, RetryConfig};

/// Prelude module for convenient imports.
///
/// ```rust
/// use opensea_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        Address, CollectionSlug, Environment, TokenId,
        // Enums
        OrderSide,
        // Records
        Asset, Collection, CollectionStats, OrderSet,
    };
    pub use crate::api::{AssetsQuery, OrdersQuery};
    pub use crate::client::{ClientConfig, OpenSeaClient, PaginatedStream, RetryConfig};
}
