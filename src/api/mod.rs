//! API service modules for OpenSea endpoints.
//!
//! Each service provides methods for one resource kind, along with the
//! pure decoder that turns a response body into typed records.

mod assets;
mod collections;
mod orders;

pub use assets::{decode_assets, AssetsQuery, AssetsService};
pub use collections::{decode_collection, CollectionsService};
pub use orders::{decode_orders, OrdersQuery, OrdersService};
