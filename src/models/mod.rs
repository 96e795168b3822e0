//! Data models for the OpenSea API.
//!
//! - [`primitives`] - Identifier newtypes and [`Environment`]
//! - [`enums`] - Enumeration types such as [`OrderSide`]
//! - [`asset`] - Asset records
//! - [`collection`] - Collection records and statistics
//! - [`order`] - Opaque order payloads

pub mod primitives;
pub mod enums;
pub mod asset;
pub mod collection;
pub mod order;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use asset::*;
pub use collection::*;
pub use order::*;
