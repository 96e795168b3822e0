//! Orders service for the order book endpoints.
//!
//! Order payloads are returned as [`OrderSet`], an opaque JSON object; the
//! client does not commit to a schema for them.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{Address, OrderSet, OrderSide, TokenId};
use crate::Result;

const ORDERS_PATH: &str = "/api/v1/orders";
const WYVERN_ORDERS_PATH: &str = "/wyvern/v1/orders";

/// Service for order book queries.
///
/// # Example
///
/// ```no_run
/// use opensea_rs::api::OrdersQuery;
/// use opensea_rs::{Address, OrderSide, TokenId};
///
/// # async fn example(client: opensea_rs::OpenSeaClient) -> opensea_rs::Result<()> {
/// let query = OrdersQuery::new(
///     Address::new("0x1a92f7381b9f03921564a437210bb9396471050c"),
///     TokenId::from(6069u64),
///     OrderSide::Sell,
/// );
///
/// let asks = client.orders().cheapest(&query).await?;
/// println!("{} open asks", asks.orders().len());
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Query parameters identifying the token whose orders are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersQuery {
    /// Contract of the token
    pub asset_contract_address: Address,
    /// Token id within the contract
    pub token_id: TokenId,
    /// Bids or asks
    pub side: OrderSide,
}

impl OrdersQuery {
    /// Create a new orders query.
    pub fn new(asset_contract_address: Address, token_id: TokenId, side: OrderSide) -> Self {
        Self {
            asset_contract_address,
            token_id,
            side,
        }
    }
}

/// The fixed parameters that turn a token query into a price-sorted one.
#[derive(Serialize)]
struct CheapestQuery<'a> {
    #[serde(flatten)]
    token: &'a OrdersQuery,
    bundled: bool,
    include_bundled: bool,
    order_by: &'static str,
    order_direction: &'static str,
}

/// Decode an order endpoint response body into an opaque object.
pub fn decode_orders(body: &[u8]) -> Result<OrderSet> {
    Ok(serde_json::from_slice(body)?)
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List orders for a token via `/api/v1/orders`.
    pub async fn list(&self, query: &OrdersQuery) -> Result<OrderSet> {
        self.inner
            .get_with_query(ORDERS_PATH, query, decode_orders)
            .await
    }

    /// List single-asset orders for a token via `/wyvern/v1/orders`, sorted
    /// by ETH price ascending.
    pub async fn cheapest(&self, query: &OrdersQuery) -> Result<OrderSet> {
        let query = CheapestQuery {
            token: query,
            bundled: false,
            include_bundled: false,
            order_by: "eth_price",
            order_direction: "asc",
        };

        self.inner
            .get_with_query(WYVERN_ORDERS_PATH, &query, decode_orders)
            .await
    }
}
