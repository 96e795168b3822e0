//! Collections service for `/api/v1/collection/{slug}`.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::ClientInner;
use crate::models::{Collection, CollectionSlug};
use crate::{Error, Result};

/// Service for collection lookups.
///
/// # Example
///
/// ```no_run
/// use opensea_rs::CollectionSlug;
///
/// # async fn example(client: opensea_rs::OpenSeaClient) -> opensea_rs::Result<()> {
/// let slug = CollectionSlug::new("boredapeyachtclub");
/// let collection = client.collections().get(&slug).await?;
///
/// if let Some(stats) = &collection.stats {
///     println!("Floor: {:?}", stats.floor_price);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CollectionsService {
    inner: Arc<ClientInner>,
}

/// Decode an `/api/v1/collection/{slug}` response body.
///
/// The body must be a JSON object with a `collection` object.
pub fn decode_collection(body: &[u8]) -> Result<Collection> {
    #[derive(Deserialize)]
    struct Response {
        collection: Collection,
    }

    let response: Response = serde_json::from_slice(body)?;
    Ok(response.collection)
}

impl CollectionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single collection by its slug.
    pub async fn get(&self, slug: &CollectionSlug) -> Result<Collection> {
        validate_slug(slug)?;

        self.inner
            .get(&format!("/api/v1/collection/{}", slug), decode_collection)
            .await
    }
}

/// Slugs are spliced into the request path, so only characters that
/// cannot form or escape a path segment are accepted.
fn validate_slug(slug: &CollectionSlug) -> Result<()> {
    let raw = slug.as_str();
    let allowed = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if raw.is_empty() || !allowed || raw.chars().all(|c| c == '.') {
        return Err(Error::InvalidInput(format!(
            "Invalid collection slug: {:?}",
            raw
        )));
    }

    Ok(())
}
