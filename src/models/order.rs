//! Order payloads.
//!
//! OpenSea's order endpoints have no schema this client commits to, so an
//! order response is carried as an opaque JSON object. Callers that need
//! particular fields can read them through [`OrderSet::get`] or deserialize
//! the inner value into their own type.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// The raw JSON object returned by an order endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderSet(Map<String, Value>);

impl OrderSet {
    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `orders` array, when the response carries one.
    pub fn orders(&self) -> &[Value] {
        self.0
            .get("orders")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Deserialize the whole object into a caller-defined type.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take ownership of the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
