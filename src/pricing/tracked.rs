//! Whitelist-gated tracked-amount classification.
//!
//! Decides what fraction of a two-leg pool event counts toward tracked
//! aggregate statistics (volume, fees, TVL). Untracked counterparts are
//! always computed so downstream dashboards can estimate coverage.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::engine::PriceEngine;
use crate::store::models::Token;
use crate::store::EntityStore;

/// Tracked and untracked event value in both denominations.
///
/// `eth`/`usd` apply the whitelist policy; the untracked fields are the
/// naive two-leg sums regardless of whitelist membership.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AdjustedAmounts {
    pub eth: BigDecimal,
    pub usd: BigDecimal,
    pub eth_untracked: BigDecimal,
    pub usd_untracked: BigDecimal,
}

impl AdjustedAmounts {
    pub fn zero() -> Self {
        Self {
            eth: BigDecimal::zero(),
            usd: BigDecimal::zero(),
            eth_untracked: BigDecimal::zero(),
            usd_untracked: BigDecimal::zero(),
        }
    }
}

impl<'a, S: EntityStore> PriceEngine<'a, S> {
    /// Tracked USD value of a two-leg event.
    ///
    /// If both tokens are whitelisted, the legs' USD values are summed.
    /// If only one is, the whitelisted leg stands in for the full trade
    /// and is doubled. If neither is, no trusted price exists and nothing
    /// is tracked.
    pub fn tracked_amount_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        let Some(bundle) = self.store.bundle() else {
            return BigDecimal::zero();
        };
        let price0_usd = &token0.derived_eth * &bundle.eth_price_usd;
        let price1_usd = &token1.derived_eth * &bundle.eth_price_usd;

        let token0_whitelisted = self.anchors.is_whitelisted(&token0.address);
        let token1_whitelisted = self.anchors.is_whitelisted(&token1.address);

        if token0_whitelisted && token1_whitelisted {
            return amount0 * &price0_usd + amount1 * &price1_usd;
        }

        if token0_whitelisted {
            return amount0 * &price0_usd * BigDecimal::from(2);
        }

        if token1_whitelisted {
            return amount1 * &price1_usd * BigDecimal::from(2);
        }

        BigDecimal::zero()
    }

    /// Tracked and untracked value of a two-leg event, in reference-asset
    /// units and USD.
    ///
    /// Applies the same four-way whitelist policy as
    /// [`tracked_amount_usd`](Self::tracked_amount_usd); all four fields
    /// are zero when the reference-price bundle does not exist yet.
    pub fn adjusted_amounts(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> AdjustedAmounts {
        let Some(bundle) = self.store.bundle() else {
            return AdjustedAmounts::zero();
        };

        let value0 = amount0 * &token0.derived_eth;
        let value1 = amount1 * &token1.derived_eth;
        let eth_untracked = &value0 + &value1;

        let token0_whitelisted = self.anchors.is_whitelisted(&token0.address);
        let token1_whitelisted = self.anchors.is_whitelisted(&token1.address);

        let eth = if token0_whitelisted && token1_whitelisted {
            eth_untracked.clone()
        } else if token0_whitelisted {
            value0 * BigDecimal::from(2)
        } else if token1_whitelisted {
            value1 * BigDecimal::from(2)
        } else {
            BigDecimal::zero()
        };

        let usd = &eth * &bundle.eth_price_usd;
        let usd_untracked = &eth_untracked * &bundle.eth_price_usd;

        AdjustedAmounts {
            eth,
            usd,
            eth_untracked,
            usd_untracked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnchorSet, PricingSettings};
    use crate::metadata::NullMetadata;
    use crate::store::models::Bundle;
    use crate::store::MemoryStore;
    use num_bigint::BigInt;
    use std::str::FromStr;

    const WETH: &str = "0x00000000000000000000000000000000000000aa";
    const USDC: &str = "0x00000000000000000000000000000000000000bb";
    const ABC: &str = "0x00000000000000000000000000000000000000cc";
    const XYZ: &str = "0x00000000000000000000000000000000000000dd";
    const ANCHOR_POOL: &str = "0x0000000000000000000000000000000000000f01";

    fn anchors() -> AnchorSet {
        AnchorSet::from_settings(&PricingSettings {
            reference_token: WETH.to_string(),
            anchor_pool: ANCHOR_POOL.to_string(),
            whitelist: vec![WETH.to_string(), USDC.to_string()],
            minimum_reference_locked: "0".to_string(),
        })
        .unwrap()
    }

    fn token(address: &str, derived_eth: &str) -> Token {
        let mut token = Token::new(
            address.to_string(),
            String::new(),
            String::new(),
            18,
            BigInt::from(0),
        );
        token.derived_eth = BigDecimal::from_str(derived_eth).unwrap();
        token
    }

    fn store_with_bundle() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut bundle = Bundle::new();
        // 2000 USD per reference unit
        bundle.eth_price_usd = BigDecimal::from(2000);
        store.save_bundle(&bundle).unwrap();
        store
    }

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    // Fixture mirrors the classification matrix: whitelisted legs are
    // worth 100 USD (amount 10 at 10 USD), unlisted legs 50 USD
    // (amount 20 at 2.5 USD).

    #[test]
    fn both_whitelisted_sums_both_legs() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let weth = token(WETH, "0.005");
        let usdc = token(USDC, "0.005");
        let tracked =
            engine.tracked_amount_usd(&dec("10"), &weth, &dec("10"), &usdc);
        assert_eq!(tracked, dec("200"));
    }

    #[test]
    fn single_whitelisted_leg_is_doubled() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let usdc = token(USDC, "0.005");
        let abc = token(ABC, "0.00125");

        // whitelisted leg first
        let tracked = engine.tracked_amount_usd(&dec("10"), &usdc, &dec("20"), &abc);
        assert_eq!(tracked, dec("200"));

        // symmetric: whitelisted leg second
        let tracked = engine.tracked_amount_usd(&dec("20"), &abc, &dec("10"), &usdc);
        assert_eq!(tracked, dec("200"));
    }

    #[test]
    fn neither_whitelisted_tracks_nothing() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let abc = token(ABC, "0.00125");
        let xyz = token(XYZ, "0.005");
        let tracked = engine.tracked_amount_usd(&dec("20"), &abc, &dec("10"), &xyz);
        assert_eq!(tracked, BigDecimal::zero());
    }

    #[test]
    fn missing_bundle_zeroes_tracked_usd() {
        let store = MemoryStore::new();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let weth = token(WETH, "0.005");
        let usdc = token(USDC, "0.005");
        let tracked = engine.tracked_amount_usd(&dec("10"), &weth, &dec("10"), &usdc);
        assert_eq!(tracked, BigDecimal::zero());
    }

    #[test]
    fn adjusted_amounts_track_and_untrack_in_both_units() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let usdc = token(USDC, "0.005");
        let abc = token(ABC, "0.00125");
        let amounts = engine.adjusted_amounts(&dec("10"), &usdc, &dec("20"), &abc);

        // tracked: whitelisted leg doubled; 10 * 0.005 * 2 = 0.1
        assert_eq!(amounts.eth, dec("0.1"));
        assert_eq!(amounts.usd, dec("200"));
        // untracked: naive sum of both legs
        assert_eq!(amounts.eth_untracked, dec("0.075"));
        assert_eq!(amounts.usd_untracked, dec("150"));
    }

    #[test]
    fn adjusted_amounts_sum_when_both_whitelisted() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let weth = token(WETH, "0.005");
        let usdc = token(USDC, "0.005");
        let amounts = engine.adjusted_amounts(&dec("10"), &weth, &dec("10"), &usdc);

        assert_eq!(amounts.eth, dec("0.1"));
        assert_eq!(amounts.eth, amounts.eth_untracked);
        assert_eq!(amounts.usd, dec("200"));
    }

    #[test]
    fn adjusted_amounts_zero_tracked_when_neither_whitelisted() {
        let store = store_with_bundle();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let abc = token(ABC, "0.00125");
        let xyz = token(XYZ, "0.005");
        let amounts = engine.adjusted_amounts(&dec("20"), &abc, &dec("10"), &xyz);

        assert_eq!(amounts.eth, BigDecimal::zero());
        assert_eq!(amounts.usd, BigDecimal::zero());
        // untracked totals are still computed for coverage estimation
        assert_eq!(amounts.eth_untracked, dec("0.075"));
        assert_eq!(amounts.usd_untracked, dec("150"));
    }

    #[test]
    fn adjusted_amounts_all_zero_without_bundle() {
        let store = MemoryStore::new();
        let anchors = anchors();
        let engine = PriceEngine::new(&store, &anchors, &NullMetadata);

        let weth = token(WETH, "0.005");
        let abc = token(ABC, "0.00125");
        let amounts = engine.adjusted_amounts(&dec("10"), &weth, &dec("20"), &abc);
        assert_eq!(amounts, AdjustedAmounts::zero());
    }
}
