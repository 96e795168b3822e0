//! Enumeration types for the OpenSea API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Side of an order book entry.
///
/// OpenSea encodes the side as an integer: `0` for bids, `1` for asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// A bid to buy the asset
    Buy,
    /// An ask to sell the asset
    Sell,
}

impl OrderSide {
    /// The wire value for this side.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl Serialize for OrderSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for OrderSide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(OrderSide::Buy),
            1 => Ok(OrderSide::Sell),
            other => Err(serde::de::Error::custom(format!(
                "invalid order side: {}",
                other
            ))),
        }
    }
}
