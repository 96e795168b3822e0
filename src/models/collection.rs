//! Collection models for `/api/v1/collection/{slug}`.

use serde::{Deserialize, Serialize};

use super::asset::DisplayData;

/// A collection and its trading statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// Editor addresses
    pub editors: Option<Vec<String>>,
    /// Tokens accepted as payment
    pub payment_tokens: Option<Vec<PaymentToken>>,
    /// Contracts belonging to the collection
    pub primary_asset_contracts: Option<Vec<PrimaryAssetContract>>,
    /// Trading statistics
    pub stats: Option<CollectionStats>,
    /// Banner image URL
    pub banner_image_url: Option<String>,
    /// Chat URL
    pub chat_url: Option<String>,
    /// Creation date
    pub created_date: Option<String>,
    /// Whether prices default to fiat
    pub default_to_fiat: Option<bool>,
    /// Description
    pub description: Option<String>,
    /// Developer buyer fee in basis points
    pub dev_buyer_fee_basis_points: Option<String>,
    /// Developer seller fee in basis points
    pub dev_seller_fee_basis_points: Option<String>,
    /// Discord invite URL
    pub discord_url: Option<String>,
    /// Display settings
    pub display_data: Option<DisplayData>,
    /// External URL
    pub external_url: Option<String>,
    /// Whether the collection is featured
    pub featured: Option<bool>,
    /// Featured image URL
    pub featured_image_url: Option<String>,
    /// Whether the collection is hidden
    pub hidden: Option<bool>,
    /// Safelist status
    pub safelist_request_status: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Whether subject to whitelist
    pub is_subject_to_whitelist: Option<bool>,
    /// Large image URL
    pub large_image_url: Option<String>,
    /// Medium username
    pub medium_username: Option<String>,
    /// Name
    pub name: Option<String>,
    /// Whether only proxied transfers are allowed
    pub only_proxied_transfers: Option<bool>,
    /// OpenSea buyer fee in basis points
    pub opensea_buyer_fee_basis_points: Option<String>,
    /// OpenSea seller fee in basis points
    pub opensea_seller_fee_basis_points: Option<String>,
    /// Payout address
    pub payout_address: Option<String>,
    /// Whether email is required
    pub require_email: Option<bool>,
    /// Short description
    pub short_description: Option<String>,
    /// URL slug
    pub slug: Option<String>,
    /// Telegram URL
    pub telegram_url: Option<String>,
    /// Twitter username
    pub twitter_username: Option<String>,
    /// Instagram username
    pub instagram_username: Option<String>,
    /// Wiki URL
    pub wiki_url: Option<String>,
}

/// A token accepted as payment in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentToken {
    /// OpenSea's internal id
    pub id: Option<i64>,
    /// Ticker symbol
    pub symbol: Option<String>,
    /// Token contract address
    pub address: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Name
    pub name: Option<String>,
    /// Decimals
    pub decimals: Option<i64>,
    /// Price in ETH
    pub eth_price: Option<f64>,
    /// Price in USD
    pub usd_price: Option<f64>,
}

/// A contract listed under a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryAssetContract {
    /// Contract address
    pub address: Option<String>,
    /// Contract type
    pub asset_contract_type: Option<String>,
    /// Creation date
    pub created_date: Option<String>,
    /// Name
    pub name: Option<String>,
    /// NFT standard version
    pub nft_version: Option<String>,
    /// OpenSea version
    pub opensea_version: Option<String>,
    /// Owner id
    pub owner: Option<i64>,
    /// Schema name
    pub schema_name: Option<String>,
    /// Symbol
    pub symbol: Option<String>,
    /// Total supply
    pub total_supply: Option<String>,
    /// Description
    pub description: Option<String>,
    /// External link
    pub external_link: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Whether prices default to fiat
    pub default_to_fiat: Option<bool>,
    /// Developer buyer fee in basis points
    pub dev_buyer_fee_basis_points: Option<i64>,
    /// Developer seller fee in basis points
    pub dev_seller_fee_basis_points: Option<i64>,
    /// Whether only proxied transfers are allowed
    pub only_proxied_transfers: Option<bool>,
    /// OpenSea buyer fee in basis points
    pub opensea_buyer_fee_basis_points: Option<i64>,
    /// OpenSea seller fee in basis points
    pub opensea_seller_fee_basis_points: Option<i64>,
    /// Total buyer fee in basis points
    pub buyer_fee_basis_points: Option<i64>,
    /// Total seller fee in basis points
    pub seller_fee_basis_points: Option<i64>,
    /// Payout address
    pub payout_address: Option<String>,
}

/// Volume and price statistics of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionStats {
    /// 24h volume
    pub one_day_volume: Option<f64>,
    /// 24h volume change
    pub one_day_change: Option<f64>,
    /// 24h sales
    pub one_day_sales: Option<f64>,
    /// 24h average price
    pub one_day_average_price: Option<f64>,
    /// 7d volume
    pub seven_day_volume: Option<f64>,
    /// 7d volume change
    pub seven_day_change: Option<f64>,
    /// 7d sales
    pub seven_day_sales: Option<f64>,
    /// 7d average price
    pub seven_day_average_price: Option<f64>,
    /// 30d volume
    pub thirty_day_volume: Option<f64>,
    /// 30d volume change
    pub thirty_day_change: Option<f64>,
    /// 30d sales
    pub thirty_day_sales: Option<f64>,
    /// 30d average price
    pub thirty_day_average_price: Option<f64>,
    /// All-time volume
    pub total_volume: Option<f64>,
    /// All-time sales
    pub total_sales: Option<f64>,
    /// Total supply
    pub total_supply: Option<f64>,
    /// Item count
    pub count: Option<f64>,
    /// Distinct owners
    pub num_owners: Option<i64>,
    /// All-time average price
    pub average_price: Option<f64>,
    /// Number of reports
    pub num_reports: Option<i64>,
    /// Market cap
    pub market_cap: Option<f64>,
    /// Floor price
    pub floor_price: Option<f64>,
}
