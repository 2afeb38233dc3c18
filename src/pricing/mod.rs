//! Price discovery and tracked-amount classification.
//!
//! This module is organized into focused submodules:
//!
//! - [`decimal`] - Fixed-point decimal helpers (safe division, unit scaling)
//! - [`engine`] - Reference-price resolution and per-token price derivation
//! - [`tracked`] - Whitelist-gated tracked-amount classification

mod decimal;
mod engine;
mod tracked;

// Decimal helpers
pub use decimal::{
    convert_token_to_decimal, exponent_to_big_decimal, safe_div, sqrt_price_x96_to_token_prices,
};

// Derivation engine
pub use engine::PriceEngine;

// Tracked-amount classification
pub use tracked::AdjustedAmounts;
