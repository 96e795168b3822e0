//! Assets service for `/api/v1/assets`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::client::paginated::{PageRequest, PaginatedStream, Paginator};
use crate::client::ClientInner;
use crate::models::{Address, Asset, CollectionSlug};
use crate::{Error, Result};

const ASSETS_PATH: &str = "/api/v1/assets";

/// Service for listing assets.
///
/// # Example
///
/// ```no_run
/// use opensea_rs::Address;
///
/// # async fn example(client: opensea_rs::OpenSeaClient) -> opensea_rs::Result<()> {
/// let owner = Address::new("0x3b417FaeE9d2ff636701100891DC2755b5321Cc3");
///
/// // Every asset the address owns, fetched page by page
/// let assets = client.assets().list_all(&owner).await?;
/// for asset in assets {
///     println!("{:?} #{:?}", asset.name, asset.token_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AssetsService {
    inner: Arc<ClientInner>,
}

/// Filters for listing assets.
///
/// Paging parameters are added by the service and are not part of the query.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AssetsQuery {
    /// Only assets owned by this address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Address>,
    /// Only assets in this collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionSlug>,
    /// Only assets minted by this contract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<Address>,
}

impl AssetsQuery {
    /// Query for every asset owned by `owner`.
    pub fn owner(owner: &Address) -> Self {
        Self {
            owner: Some(owner.clone()),
            ..Self::default()
        }
    }

    /// Restrict to a collection.
    pub fn with_collection(mut self, slug: impl Into<CollectionSlug>) -> Self {
        self.collection = Some(slug.into());
        self
    }

    /// Restrict to a contract.
    pub fn with_contract(mut self, address: impl Into<Address>) -> Self {
        self.asset_contract_address = Some(address.into());
        self
    }
}

#[derive(Serialize)]
struct PagedQuery<'a> {
    #[serde(flatten)]
    filter: &'a AssetsQuery,
    limit: u32,
    offset: u64,
}

/// Decode an `/api/v1/assets` response body.
///
/// The body must be a JSON object with an `assets` array; unknown fields
/// are ignored.
pub fn decode_assets(body: &[u8]) -> Result<Vec<Asset>> {
    #[derive(Deserialize)]
    struct Response {
        assets: Vec<Asset>,
    }

    let response: Response = serde_json::from_slice(body)?;
    Ok(response.assets)
}

impl AssetsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of assets starting at `offset`, using the configured
    /// page size as `limit`.
    pub async fn page(&self, query: &AssetsQuery, offset: u64) -> Result<Vec<Asset>> {
        self.page_with_limit(query, offset, self.inner.config.page_size)
            .await
    }

    /// Fetch one page of assets with an explicit `limit`.
    pub async fn page_with_limit(
        &self,
        query: &AssetsQuery,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Asset>> {
        fetch_page(&self.inner, query, PageRequest { offset, limit }).await
    }

    /// Fetch every asset owned by `owner`.
    ///
    /// Pages are requested one at a time with the configured delay between
    /// them until an empty page comes back. Any failed page fails the whole
    /// call and nothing fetched before it is returned.
    pub async fn list_all(&self, owner: &Address) -> Result<Vec<Asset>> {
        self.list_all_matching(&AssetsQuery::owner(owner)).await
    }

    /// Fetch every asset matching `query`.
    pub async fn list_all_matching(&self, query: &AssetsQuery) -> Result<Vec<Asset>> {
        Paginator::from_config(&self.inner.config)
            .collect_all_with_cancel(&self.inner.cancellation_token, |request| {
                fetch_page(&self.inner, query, request)
            })
            .await
    }

    /// Fetch every asset matching `query`, aborting with
    /// [`Error::Cancelled`] when either `cancel` or the client's own token
    /// fires.
    pub async fn list_all_with_cancel(
        &self,
        query: &AssetsQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Asset>> {
        let paginator = Paginator::from_config(&self.inner.config);

        tokio::select! {
            biased;
            _ = self.inner.cancellation_token.cancelled() => Err(Error::Cancelled),
            result = paginator.collect_all_with_cancel(cancel, |request| {
                fetch_page(&self.inner, query, request)
            }) => result,
        }
    }

    /// Stream every asset owned by `owner`, one page in memory at a time.
    pub fn list_stream(&self, owner: &Address) -> PaginatedStream<Asset> {
        self.list_stream_matching(AssetsQuery::owner(owner))
    }

    /// Stream every asset matching `query`.
    pub fn list_stream_matching(&self, query: AssetsQuery) -> PaginatedStream<Asset> {
        let inner = self.inner.clone();

        Paginator::from_config(&self.inner.config).stream(move |request| {
            let inner = inner.clone();
            let query = query.clone();
            Box::pin(async move { fetch_page(&inner, &query, request).await })
        })
    }
}

async fn fetch_page(
    inner: &ClientInner,
    query: &AssetsQuery,
    request: PageRequest,
) -> Result<Vec<Asset>> {
    let paged = PagedQuery {
        filter: query,
        limit: request.limit,
        offset: request.offset,
    };

    inner
        .get_with_query(ASSETS_PATH, &paged, decode_assets)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_assets_ignores_unknown_fields() {
        let body = br#"{
            "assets": [
                {"id": 1, "token_id": "42", "name": "First", "brand_new_field": true},
                {"id": 2, "token_id": "43", "name": null}
            ],
            "next": "cursor"
        }"#;

        let assets = decode_assets(body).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].token_id.as_deref(), Some("42"));
        assert_eq!(assets[0].name.as_deref(), Some("First"));
        assert_eq!(assets[1].name, None);
    }

    #[test]
    fn test_decode_assets_empty_page() {
        assert!(decode_assets(br#"{"assets": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_assets_requires_wrapper() {
        assert!(matches!(
            decode_assets(br#"[{"id": 1}]"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            decode_assets(br#"{"items": []}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_decode_assets_malformed() {
        assert!(matches!(decode_assets(b"<html>"), Err(Error::Json(_))));
        assert!(matches!(decode_assets(b""), Err(Error::Json(_))));
    }

    #[test]
    fn test_paged_query_serialization() {
        let filter = AssetsQuery::owner(&Address::new("0xabc")).with_collection("apes");
        let paged = PagedQuery {
            filter: &filter,
            limit: 50,
            offset: 100,
        };

        let value = serde_json::to_value(&paged).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "owner": "0xabc",
                "collection": "apes",
                "limit": 50,
                "offset": 100
            })
        );
    }
}
