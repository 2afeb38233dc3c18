//! Reference-price resolution and per-token price derivation.

use bigdecimal::BigDecimal;
use log::debug;
use num_traits::{One, Signed, Zero};

use crate::config::AnchorSet;
use crate::metadata::TokenMetadataSource;
use crate::store::models::Token;
use crate::store::EntityStore;

/// Price discovery over a token's whitelist pools.
///
/// Holds references only and caches nothing across calls: every operation
/// re-reads store state, so results are always as fresh as the last
/// processed on-chain event.
pub struct PriceEngine<'a, S: EntityStore> {
    pub(super) store: &'a S,
    pub(super) anchors: &'a AnchorSet,
    metadata: &'a dyn TokenMetadataSource,
    minimum_reference_locked: BigDecimal,
}

impl<'a, S: EntityStore> PriceEngine<'a, S> {
    pub fn new(
        store: &'a S,
        anchors: &'a AnchorSet,
        metadata: &'a dyn TokenMetadataSource,
    ) -> Self {
        let minimum_reference_locked = anchors.minimum_reference_locked().clone();
        Self {
            store,
            anchors,
            metadata,
            minimum_reference_locked,
        }
    }

    /// Override the minimum-locked floor used to reject dust pools.
    pub fn with_minimum_locked(mut self, floor: BigDecimal) -> Self {
        self.minimum_reference_locked = floor;
        self
    }

    /// USD price of one reference-asset unit, read from the anchor pool.
    ///
    /// Returns the anchor pool's `token1_price`; zero if the pool has not
    /// been observed on-chain yet. No caching: every call re-reads the
    /// store.
    pub fn reference_price_usd(&self) -> BigDecimal {
        match self.store.pool(self.anchors.anchor_pool()) {
            Some(pool) => pool.token1_price,
            None => BigDecimal::zero(),
        }
    }

    /// Search the token's whitelist pools for its price in reference-asset
    /// units.
    ///
    /// Takes the price from the pool backed by the largest trusted value
    /// locked. Iteration follows the stored insertion order and the
    /// comparison is strictly greater-than, so equal candidates resolve
    /// first-seen-wins; this must hold exactly for reproducibility.
    ///
    /// Returns zero when no pool qualifies, meaning "unpriced" rather than
    /// a worthless valuation.
    pub fn derive_reference_price(&self, token: &Token) -> BigDecimal {
        if self.anchors.is_reference(&token.address) {
            return BigDecimal::one();
        }

        if self.store.bundle().is_none() {
            return BigDecimal::zero();
        }

        let mut largest_reference_locked = BigDecimal::zero();
        let mut price_so_far = BigDecimal::zero();

        for pool_address in &token.whitelist_pools {
            let Some(pool) = self.store.pool(pool_address) else {
                continue;
            };

            // A pool with no liquidity cannot provide a price signal
            if !pool.liquidity.is_positive() {
                continue;
            }

            // The counter-party side backs this venue's trustworthiness
            let (other_address, quoted_price, other_locked) = if pool.token0 == token.address {
                (
                    &pool.token1,
                    &pool.token1_price,
                    &pool.total_value_locked_token1,
                )
            } else if pool.token1 == token.address {
                (
                    &pool.token0,
                    &pool.token0_price,
                    &pool.total_value_locked_token0,
                )
            } else {
                debug!(
                    "pool {} linked to token {} contains neither side, skipping",
                    pool.address, token.address
                );
                continue;
            };

            let other = self.store.token(other_address).unwrap_or_else(|| {
                debug!("synthesizing default record for unseen token {other_address}");
                Token::empty(other_address, self.metadata)
            });

            let reference_locked = other_locked * &other.derived_eth;
            if reference_locked > largest_reference_locked
                && reference_locked > self.minimum_reference_locked
            {
                // counter-party units per our token, times reference per
                // counter-party unit
                price_so_far = quoted_price * &other.derived_eth;
                largest_reference_locked = reference_locked;
            }
        }

        price_so_far
    }
}
