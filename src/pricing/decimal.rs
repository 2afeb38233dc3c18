//! Fixed-point decimal helpers.
//!
//! All downstream pricing formulas must stay total over pool states with
//! zero liquidity or zero price, so division by zero yields zero here
//! rather than an error.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

static POW10_CACHE: Lazy<[BigDecimal; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigDecimal::from(BigInt::from(10u32).pow(i as u32))));

/// 2^192, the squared Q64.96 fixed-point scaling factor.
static Q192: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(BigInt::from(2u32).pow(192)));

/// Divide, with division by zero yielding zero.
pub fn safe_div(amount0: &BigDecimal, amount1: &BigDecimal) -> BigDecimal {
    if amount1.is_zero() {
        BigDecimal::zero()
    } else {
        amount0 / amount1
    }
}

/// Compute 10^decimals as an exact BigDecimal.
pub fn exponent_to_big_decimal(decimals: u8) -> BigDecimal {
    if (decimals as usize) < POW10_CACHE.len() {
        POW10_CACHE[decimals as usize].clone()
    } else {
        BigDecimal::from(BigInt::from(10u32).pow(decimals as u32))
    }
}

/// Convert raw integer token units to human-scaled decimal units using the
/// token's decimal-precision attribute as the exponent.
pub fn convert_token_to_decimal(amount: &BigInt, decimals: u8) -> BigDecimal {
    if decimals == 0 {
        return BigDecimal::from(amount.clone());
    }
    safe_div(
        &BigDecimal::from(amount.clone()),
        &exponent_to_big_decimal(decimals),
    )
}

/// Convert a sqrtPriceX96 observation into both directional pool prices.
///
/// price1 (token1 per token0) = (sqrtPriceX96^2 / 2^192) adjusted by the
/// pair's decimal difference; price0 is its safe inverse.
pub fn sqrt_price_x96_to_token_prices(
    sqrt_price_x96: &BigInt,
    token0_decimals: u8,
    token1_decimals: u8,
) -> (BigDecimal, BigDecimal) {
    let num = BigDecimal::from(sqrt_price_x96 * sqrt_price_x96);
    let price1 = &num / &*Q192 * exponent_to_big_decimal(token0_decimals)
        / exponent_to_big_decimal(token1_decimals);
    let price0 = safe_div(&BigDecimal::one(), &price1);
    (price0, price1)
}
