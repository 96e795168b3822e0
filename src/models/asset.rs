//! Asset models.
//!
//! Mirrors the asset object returned by `/api/v1/assets`. Fields are passed
//! through as OpenSea sends them; nothing here is interpreted by the client.
//! Almost every field is nullable upstream, so absent and `null` values both
//! decode to `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single NFT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// OpenSea's internal id
    pub id: Option<i64>,
    /// Token id within the contract
    pub token_id: Option<String>,
    /// Number of sales recorded
    pub num_sales: Option<i64>,
    /// Background color hex, without `#`
    pub background_color: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Preview image URL
    pub image_preview_url: Option<String>,
    /// Thumbnail image URL
    pub image_thumbnail_url: Option<String>,
    /// Original image URL
    pub image_original_url: Option<String>,
    /// Animation URL
    pub animation_url: Option<String>,
    /// Original animation URL
    pub animation_original_url: Option<String>,
    /// Name
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// External link set by the creator
    pub external_link: Option<String>,
    /// Contract the token lives in
    pub asset_contract: Option<AssetContract>,
    /// OpenSea listing page
    pub permalink: Option<String>,
    /// Collection the asset belongs to
    pub collection: Option<AssetCollection>,
    /// Decimals for semi-fungible tokens
    pub decimals: Option<i64>,
    /// Token metadata URI
    pub token_metadata: Option<String>,
    /// Whether the asset is flagged NSFW
    pub is_nsfw: Option<bool>,
    /// Current owner
    pub owner: Option<Account>,
    /// Creator
    pub creator: Option<Account>,
    /// Open sell orders, shape not fixed by the API
    pub sell_orders: Option<Value>,
    /// Last sale
    pub last_sale: Option<LastSale>,
    /// Highest bid, shape not fixed by the API
    pub top_bid: Option<Value>,
    /// Listing date
    pub listing_date: Option<String>,
    /// Whether the asset is in presale
    pub is_presale: Option<bool>,
    /// Transfer fee payment token, shape not fixed by the API
    pub transfer_fee_payment_token: Option<Value>,
    /// Transfer fee
    pub transfer_fee: Option<Value>,
    /// Token traits
    pub traits: Option<Vec<Trait>>,
}

/// Contract details embedded in an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetContract {
    /// Contract address
    pub address: Option<String>,
    /// `fungible`, `non-fungible` or `semi-fungible`
    pub asset_contract_type: Option<String>,
    /// Creation date
    pub created_date: Option<String>,
    /// Contract name
    pub name: Option<String>,
    /// NFT standard version
    pub nft_version: Option<String>,
    /// OpenSea version
    pub opensea_version: Option<String>,
    /// Owner id
    pub owner: Option<i64>,
    /// `ERC721`, `ERC1155`, ...
    pub schema_name: Option<String>,
    /// Token symbol
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
    /// Payout address for creator fees
    pub payout_address: Option<String>,
}

/// Collection summary embedded in an asset.
///
/// Unlike [`Collection`](super::Collection), fee fields arrive as strings here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetCollection {
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
    /// Safelist status (`verified`, `approved`, ...)
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

/// Owner or creator of an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Wallet address
    pub address: Option<String>,
    /// Account config flag (e.g. `verified`)
    pub config: Option<String>,
    /// Profile image URL
    pub profile_img_url: Option<String>,
    /// OpenSea user, if the wallet has one
    pub user: Option<User>,
}

/// An OpenSea user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Username
    pub username: Option<String>,
}

/// Display settings for a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayData {
    /// Card style (`contain`, `cover`, `padded`)
    pub card_display_style: Option<String>,
}

/// Last sale of an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSale {
    /// The asset as it was sold
    pub asset: Option<LastSaleAsset>,
    /// Sale event type
    pub event_type: Option<String>,
    /// Event timestamp
    pub event_timestamp: Option<String>,
    /// Total price in the payment token's base units
    pub total_price: Option<String>,
    /// Quantity sold
    pub quantity: Option<String>,
}

/// Asset reference inside a [`LastSale`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSaleAsset {
    /// Token id
    pub token_id: Option<String>,
    /// Decimals
    pub decimals: Option<i64>,
}

/// A metadata trait of an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trait {
    /// Trait category
    pub trait_type: Option<String>,
    /// Trait value; string or number depending on the trait
    pub value: Option<Value>,
    /// Display type (`number`, `boost_percentage`, ...)
    pub display_type: Option<String>,
    /// Maximum value for numeric traits
    pub max_value: Option<Value>,
    /// Number of assets in the collection sharing this trait
    pub trait_count: Option<i64>,
    /// Sort order
    pub order: Option<Value>,
}
