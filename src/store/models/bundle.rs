use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

/// Process-wide singleton holding the reference asset's USD price.
///
/// Created once at initialization with price zero, updated every time the
/// anchor pool's price is reobserved, never deleted.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Bundle {
    pub eth_price_usd: BigDecimal,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Bundle {
    /// Fixed singleton id under which the bundle is stored.
    pub const ID: &'static str = "1";

    pub fn new() -> Self {
        Self {
            eth_price_usd: BigDecimal::zero(),
            updated_at: None,
        }
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}
