use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_traits::Zero;

use super::Token;
use crate::pricing::sqrt_price_x96_to_token_prices;
use crate::utils::normalize_address;

/// Liquidity pool state
///
/// Primary Key: address
/// token0/token1 ordering is fixed at creation and never swapped.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Pool {
    // Primary key
    pub address: String,

    // Token pair (denormalized)
    pub token0: String,
    pub token1: String,
    pub token0_decimals: u8,
    pub token1_decimals: u8,

    // Current in-range liquidity (raw integer units, never negative)
    pub liquidity: BigInt,

    // Computed prices (Uniswap style)
    // token0_price = token0 per token1
    // token1_price = token1 per token0
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,

    // Total value locked per side, in each token's native units
    pub total_value_locked_token0: BigDecimal,
    pub total_value_locked_token1: BigDecimal,

    pub updated_at: Option<DateTime<Utc>>,
}

impl Pool {
    /// Create a pool with zeroed state at first observation.
    pub fn new(address: &str, token0: &Token, token1: &Token) -> Self {
        Self {
            address: normalize_address(address).unwrap_or_else(|| address.to_lowercase()),
            token0: token0.address.clone(),
            token1: token1.address.clone(),
            token0_decimals: token0.decimals,
            token1_decimals: token1.decimals,
            liquidity: BigInt::zero(),
            token0_price: BigDecimal::zero(),
            token1_price: BigDecimal::zero(),
            total_value_locked_token0: BigDecimal::zero(),
            total_value_locked_token1: BigDecimal::zero(),
            updated_at: None,
        }
    }

    /// Refresh both directional prices from a new sqrtPriceX96 observation.
    pub fn update_from_sqrt_price(&mut self, sqrt_price_x96: &BigInt) {
        let (price0, price1) = sqrt_price_x96_to_token_prices(
            sqrt_price_x96,
            self.token0_decimals,
            self.token1_decimals,
        );
        self.token0_price = price0;
        self.token1_price = price1;
    }
}
