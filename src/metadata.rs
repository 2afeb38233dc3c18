//! Token metadata source contract.
//!
//! Metadata (decimals, name, symbol, total supply) lives on-chain and is
//! fetched by an external collaborator. The core only consumes it through
//! [`TokenMetadataSource`], and every accessor is best-effort: on a failed
//! read the implementation returns a zero/empty default instead of an
//! error, and the core tolerates those defaults silently.

use num_bigint::BigInt;
use num_traits::Zero;
use rustc_hash::FxHashMap;

/// Read-through access to token metadata.
///
/// Implementations must never fail: a token that cannot be read yields
/// defaults (`0` decimals, empty strings, zero supply).
pub trait TokenMetadataSource {
    fn decimals(&self, address: &str) -> u8;
    fn name(&self, address: &str) -> String;
    fn symbol(&self, address: &str) -> String;
    fn total_supply(&self, address: &str) -> BigInt;
}

/// Metadata source that knows nothing; every read yields the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetadata;

impl TokenMetadataSource for NullMetadata {
    fn decimals(&self, _address: &str) -> u8 {
        0
    }

    fn name(&self, _address: &str) -> String {
        String::new()
    }

    fn symbol(&self, _address: &str) -> String {
        String::new()
    }

    fn total_supply(&self, _address: &str) -> BigInt {
        BigInt::zero()
    }
}

/// One token's known metadata.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: BigInt,
}

impl TokenMetadata {
    pub fn new(symbol: &str, name: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            total_supply: BigInt::zero(),
        }
    }
}

/// Map-backed metadata source.
///
/// Used by tests and embedders that resolve metadata ahead of time.
/// Unknown addresses fall back to the same defaults as [`NullMetadata`].
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    entries: FxHashMap<String, TokenMetadata>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, metadata: TokenMetadata) {
        self.entries.insert(address.to_lowercase(), metadata);
    }

    fn get(&self, address: &str) -> Option<&TokenMetadata> {
        self.entries.get(&address.to_lowercase())
    }
}

impl TokenMetadataSource for StaticMetadata {
    fn decimals(&self, address: &str) -> u8 {
        self.get(address).map(|m| m.decimals).unwrap_or(0)
    }

    fn name(&self, address: &str) -> String {
        self.get(address).map(|m| m.name.clone()).unwrap_or_default()
    }

    fn symbol(&self, address: &str) -> String {
        self.get(address).map(|m| m.symbol.clone()).unwrap_or_default()
    }

    fn total_supply(&self, address: &str) -> BigInt {
        self.get(address)
            .map(|m| m.total_supply.clone())
            .unwrap_or_else(BigInt::zero)
    }
}
