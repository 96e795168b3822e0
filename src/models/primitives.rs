//! Primitive types and newtypes for type-safe API interactions.
//!
//! These wrap the string identifiers OpenSea uses so that an owner address,
//! a token id and a collection slug cannot be passed in each other's place.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "`.")]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_newtype! {
    /// An account or contract address (e.g. `0x3b41...1Cc3`).
    ///
    /// # Example
    ///
    /// ```
    /// use opensea_rs::Address;
    ///
    /// let owner = Address::new("0x3b417FaeE9d2ff636701100891DC2755b5321Cc3");
    /// println!("Owner: {}", owner);
    /// ```
    Address
}

string_newtype! {
    /// A token id within a contract.
    ///
    /// Kept as a string since ERC-721 ids are 256-bit integers.
    TokenId
}

string_newtype! {
    /// The URL slug of a collection (e.g. `boredapeyachtclub`).
    CollectionSlug
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Which OpenSea deployment to talk to.
///
/// # Example
///
/// ```
/// use opensea_rs::Environment;
///
/// let env = Environment::Testnets;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production API.
    #[default]
    Mainnet,
    /// Testnet API (Rinkeby-era test networks).
    Testnets,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Mainnet => "https://api.opensea.io",
            Environment::Testnets => "https://testnets-api.opensea.io",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Environment::Mainnet)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Mainnet => write!(f, "mainnet"),
            Environment::Testnets => write!(f, "testnets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_serializes_transparently() {
        let owner = Address::new("0xabc");
        assert_eq!(serde_json::to_string(&owner).unwrap(), "\"0xabc\"");
        assert_eq!(owner.to_string(), "0xabc");
    }

    #[test]
    fn test_token_id_from_integer() {
        assert_eq!(TokenId::from(6069u64).as_str(), "6069");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Mainnet.api_base_url(), "https://api.opensea.io");
        assert_eq!(
            Environment::Testnets.api_base_url(),
            "https://testnets-api.opensea.io"
        );
        assert!(Environment::default().is_mainnet());
    }
}
