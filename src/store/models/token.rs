use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::metadata::TokenMetadataSource;
use crate::utils::normalize_address;

/// Token metadata and current derived-price state
///
/// Primary Key: address
/// Query Pattern: "Get token state for address X"
#[derive(Debug, Clone, serde::Serialize)]
pub struct Token {
    // Primary key
    pub address: String,

    // On-chain metadata (immutable after first fetch)
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: BigInt,

    // Derived price state
    /// Price of one token unit in reference-asset (ETH) units.
    /// Zero means "unpriced", not a worthless valuation.
    pub derived_eth: BigDecimal,
    /// Price of one token unit in USD (derived_eth times the bundle rate).
    pub derived_usd: BigDecimal,

    // Pools pairing this token with a whitelisted anchor, in the order
    // they were first linked. The derivation engine consumes this as a
    // read-only ordered sequence; iteration order decides tie-breaks.
    pub whitelist_pools: Vec<String>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(
        address: String,
        symbol: String,
        name: String,
        decimals: u8,
        total_supply: BigInt,
    ) -> Self {
        Self {
            // Always lowercase addresses for consistent comparisons
            address: normalize_address(&address).unwrap_or_else(|| address.to_lowercase()),
            symbol,
            name,
            decimals,
            total_supply,
            derived_eth: BigDecimal::zero(),
            derived_usd: BigDecimal::zero(),
            whitelist_pools: Vec::new(),
            updated_at: None,
        }
    }

    /// Synthesize a complete default record for a token observed for the
    /// first time: metadata fetched best-effort, financial fields zeroed.
    ///
    /// A missing-record lookup must never propagate as a null financial
    /// value, so callers use this instead of skipping the token.
    pub fn empty(address: &str, metadata: &dyn TokenMetadataSource) -> Self {
        Self::new(
            address.to_string(),
            metadata.symbol(address),
            metadata.name(address),
            metadata.decimals(address),
            metadata.total_supply(address),
        )
    }

    /// Link a pool that pairs this token with a whitelisted anchor.
    ///
    /// Called by the pool-creation handler, once per pool. Insertion order
    /// is preserved and never reordered.
    pub fn add_whitelist_pool(&mut self, pool_address: &str) {
        self.whitelist_pools.push(pool_address.to_lowercase());
    }
}
