//! Integration tests for paginated asset retrieval against a local mock server.
//!
//! Run with logging: RUST_LOG=opensea_rs=debug cargo test --test assets_tests

use std::sync::Once;
use std::time::{Duration, Instant};

use futures_util::StreamExt;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use opensea_rs::prelude::*;

static INIT: Once = Once::new();

const OWNER: &str = "0x3b417FaeE9d2ff636701100891DC2755b5321Cc3";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn config(mock_server: &MockServer, page_size: u32, delay: Duration) -> ClientConfig {
    ClientConfig::new("test-key")
        .with_base_url(mock_server.uri())
        .with_page_size(page_size)
        .with_request_delay(delay)
}

async fn setup(page_size: u32, delay: Duration) -> (MockServer, OpenSeaClient) {
    init_logging();
    let mock_server = MockServer::start().await;
    let client = OpenSeaClient::with_config(config(&mock_server, page_size, delay))
        .expect("valid config");
    (mock_server, client)
}

fn asset_json(id: i64) -> Value {
    json!({
        "id": id,
        "token_id": id.to_string(),
        "name": format!("Asset #{}", id),
        "collection": { "slug": "fixture", "hidden": false },
        "unrecognised": { "nested": [1, 2, 3] }
    })
}

/// Mount a page of assets served at `offset`.
async fn mount_page(mock_server: &MockServer, offset: u64, ids: &[i64], expected_hits: u64) {
    let assets: Vec<Value> = ids.iter().map(|id| asset_json(*id)).collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(query_param("owner", OWNER))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": assets })))
        .expect(expected_hits)
        .mount(mock_server)
        .await;
}

async fn requested_offsets(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "offset")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}

fn ids(assets: &[Asset]) -> Vec<i64> {
    assets.iter().filter_map(|asset| asset.id).collect()
}

fn owner() -> Address {
    Address::new(OWNER)
}

// ============================================================================
// ACCUMULATION
// ============================================================================

#[tokio::test]
async fn test_list_all_concatenates_pages_in_order() {
    let delay = Duration::from_millis(100);
    let (mock_server, client) = setup(2, delay).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(header("x-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(query_param("owner", OWNER))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "assets": [asset_json(1), asset_json(2)] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 2, &[3], 1).await;
    mount_page(&mock_server, 4, &[], 1).await;

    let started = Instant::now();
    let assets = client.assets().list_all(&owner()).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(ids(&assets), vec![1, 2, 3]);
    assert_eq!(assets[2].name.as_deref(), Some("Asset #3"));
    assert_eq!(requested_offsets(&mock_server).await, vec!["0", "2", "4"]);
    assert!(
        elapsed >= delay * 2,
        "Expected at least two delays between three requests, took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_list_all_full_pages_then_empty() {
    let (mock_server, client) = setup(3, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[1, 2, 3], 1).await;
    mount_page(&mock_server, 3, &[4, 5, 6], 1).await;
    mount_page(&mock_server, 6, &[7, 8, 9], 1).await;
    mount_page(&mock_server, 9, &[], 1).await;

    let assets = client.assets().list_all(&owner()).await.unwrap();

    assert_eq!(ids(&assets), (1..=9).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_short_page_is_not_terminal() {
    let (mock_server, client) = setup(3, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[1], 1).await;
    mount_page(&mock_server, 3, &[2, 3, 4], 1).await;
    mount_page(&mock_server, 6, &[], 1).await;

    let assets = client.assets().list_all(&owner()).await.unwrap();

    assert_eq!(ids(&assets), vec![1, 2, 3, 4]);
    assert_eq!(requested_offsets(&mock_server).await, vec!["0", "3", "6"]);
}

#[tokio::test]
async fn test_empty_first_page_returns_empty() {
    let (mock_server, client) = setup(50, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[], 1).await;

    let assets = client.assets().list_all(&owner()).await.unwrap();

    assert!(assets.is_empty());
}

#[tokio::test]
async fn test_query_filters_are_forwarded() {
    let (mock_server, client) = setup(10, Duration::from_millis(5)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(query_param("collection", "fixture"))
        .and(query_param("asset_contract_address", "0xc0ffee"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = AssetsQuery::default()
        .with_collection("fixture")
        .with_contract("0xc0ffee");
    let assets = client.assets().list_all_matching(&query).await.unwrap();

    assert!(assets.is_empty());
}

// ============================================================================
// FAILURES
// ============================================================================

#[tokio::test]
async fn test_first_page_failure_returns_error() {
    let (mock_server, client) = setup(2, Duration::from_millis(5)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    match client.assets().list_all(&owner()).await {
        Err(Error::Api {
            status, message, ..
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mid_stream_failure_discards_earlier_pages() {
    let (mock_server, client) = setup(1, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[1], 1).await;
    mount_page(&mock_server, 1, &[2], 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 3, &[4], 0).await;
    mount_page(&mock_server, 4, &[5], 0).await;

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(result, Err(Error::Json(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let (mock_server, client) = setup(2, Duration::from_millis(5)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(result, Err(Error::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_opt_in_retry_recovers() {
    init_logging();
    let mock_server = MockServer::start().await;
    let retry = RetryConfig::no_retry()
        .with_max_retries(2)
        .with_initial_backoff(Duration::from_millis(10));
    let client = OpenSeaClient::with_config(
        config(&mock_server, 2, Duration::from_millis(5)).with_retry(retry),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 0, &[1], 1).await;
    mount_page(&mock_server, 2, &[], 1).await;

    let assets = client.assets().list_all(&owner()).await.unwrap();

    assert_eq!(ids(&assets), vec![1]);
}

#[tokio::test]
async fn test_rate_limited_response() {
    let (mock_server, client) = setup(2, Duration::from_millis(5)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(
        result,
        Err(Error::RateLimited { retry_after_secs: 7 })
    ));
}

#[tokio::test]
async fn test_request_timeout() {
    init_logging();
    let mock_server = MockServer::start().await;
    let client = OpenSeaClient::with_config(
        config(&mock_server, 2, Duration::from_millis(5)).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "assets": [] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(result, Err(Error::Timeout)), "got {:?}", result);
}

#[tokio::test]
async fn test_connection_refused() {
    init_logging();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = OpenSeaClient::with_config(
        ClientConfig::new("").with_base_url(format!("http://127.0.0.1:{}", port)),
    )
    .unwrap();

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(result, Err(Error::Http(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_max_pages_guard() {
    init_logging();
    let mock_server = MockServer::start().await;
    let client = OpenSeaClient::with_config(
        config(&mock_server, 1, Duration::from_millis(5)).with_max_pages(2),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [asset_json(1)] })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(
        result,
        Err(Error::PageLimitExceeded { max_pages: 2 })
    ));
}

#[tokio::test]
async fn test_concurrent_fetches_stay_independent() {
    const OTHER: &str = "0x00000000000000000000000000000000000000aa";

    let (mock_server, client) = setup(2, Duration::from_millis(20)).await;

    mount_page(&mock_server, 0, &[1, 2], 1).await;
    mount_page(&mock_server, 2, &[3], 1).await;
    mount_page(&mock_server, 4, &[], 1).await;

    for (offset, page) in [(0u64, vec![101, 102]), (2, vec![103, 104]), (4, vec![105]), (6, vec![])] {
        let assets: Vec<Value> = page.iter().map(|id| asset_json(*id)).collect();
        Mock::given(method("GET"))
            .and(path("/api/v1/assets"))
            .and(query_param("owner", OTHER))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": assets })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let other_client = client.clone();
    let other = Address::new(OTHER);
    let owner_addr = owner();
    let first_assets = client.assets();
    let second_assets = other_client.assets();
    let (first, second) = tokio::join!(
        first_assets.list_all(&owner_addr),
        second_assets.list_all(&other),
    );

    assert_eq!(ids(&first.unwrap()), vec![1, 2, 3]);
    assert_eq!(ids(&second.unwrap()), vec![101, 102, 103, 104, 105]);

    let requests = mock_server.received_requests().await.unwrap_or_default();
    let offsets_for = |who: &str| -> Vec<String> {
        requests
            .iter()
            .filter(|request| request.url.query_pairs().any(|(k, v)| k == "owner" && v == who))
            .filter_map(|request| {
                request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "offset")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    };
    assert_eq!(offsets_for(OWNER), vec!["0", "2", "4"]);
    assert_eq!(offsets_for(OTHER), vec!["0", "2", "4", "6"]);
}

// ============================================================================
// CANCELLATION
// ============================================================================

#[tokio::test]
async fn test_cancel_all_requests_stops_pagination() {
    let (mock_server, client) = setup(1, Duration::from_secs(30)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [asset_json(1)] })))
        .mount(&mock_server)
        .await;

    let canceller = client.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel_all_requests();
    });

    let started = Instant::now();
    let result = client.assets().list_all(&owner()).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(30));
    assert_eq!(requested_offsets(&mock_server).await, vec!["0"]);
}

#[tokio::test]
async fn test_caller_token_cancels_pagination() {
    let (mock_server, client) = setup(1, Duration::from_secs(30)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [asset_json(1)] })))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let result = client
        .assets()
        .list_all_with_cancel(&AssetsQuery::owner(&owner()), &token)
        .await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(!client.cancellation_token().is_cancelled());
}

// ============================================================================
// STREAMING AND SINGLE PAGES
// ============================================================================

#[tokio::test]
async fn test_list_stream_yields_all_assets() {
    let (mock_server, client) = setup(2, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[1, 2], 1).await;
    mount_page(&mock_server, 2, &[3], 1).await;
    mount_page(&mock_server, 4, &[], 1).await;

    let assets: Vec<Asset> = client
        .assets()
        .list_stream(&owner())
        .map(|result| result.unwrap())
        .collect()
        .await;

    assert_eq!(ids(&assets), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_stream_take_stops_fetching() {
    let (mock_server, client) = setup(2, Duration::from_millis(5)).await;

    mount_page(&mock_server, 0, &[1, 2], 1).await;
    mount_page(&mock_server, 2, &[3, 4], 0).await;

    let assets: Vec<Asset> = client
        .assets()
        .list_stream(&owner())
        .take(2)
        .map(|result| result.unwrap())
        .collect()
        .await;

    assert_eq!(ids(&assets), vec![1, 2]);
}

#[tokio::test]
async fn test_single_page_uses_given_offset() {
    let (mock_server, client) = setup(50, Duration::from_millis(5)).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [asset_json(101)] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client
        .assets()
        .page(&AssetsQuery::owner(&owner()), 100)
        .await
        .unwrap();

    assert_eq!(ids(&page), vec![101]);
}
