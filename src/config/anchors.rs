use anyhow::{anyhow, Context, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

use super::PricingSettings;
use crate::utils::normalize_address;

/// Resolved, immutable anchor configuration for one deployment.
///
/// Built once from [`PricingSettings`] with every address normalized to
/// lowercase hex, then passed by reference into the price engine. Tests
/// inject their own instances; nothing here is runtime-mutable.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    reference_token: String,
    anchor_pool: String,
    whitelist: Vec<String>,
    minimum_reference_locked: BigDecimal,
}

impl AnchorSet {
    /// Resolve settings into an anchor set.
    ///
    /// Invalid addresses and an unparseable minimum-locked threshold are
    /// configuration errors and rejected here, never silently kept.
    pub fn from_settings(settings: &PricingSettings) -> Result<Self> {
        let reference_token = normalize_address(&settings.reference_token)
            .ok_or_else(|| anyhow!("invalid reference token address: {}", settings.reference_token))?;

        let anchor_pool = normalize_address(&settings.anchor_pool)
            .ok_or_else(|| anyhow!("invalid anchor pool address: {}", settings.anchor_pool))?;

        let whitelist = settings
            .whitelist
            .iter()
            .map(|address| {
                normalize_address(address)
                    .ok_or_else(|| anyhow!("invalid whitelist address: {address}"))
            })
            .collect::<Result<Vec<String>>>()?;

        let minimum_reference_locked = BigDecimal::from_str(&settings.minimum_reference_locked)
            .context("invalid minimum_reference_locked threshold")?;

        Ok(Self {
            reference_token,
            anchor_pool,
            whitelist,
            minimum_reference_locked,
        })
    }

    /// The wrapped native token address (lowercase hex).
    pub fn reference_token(&self) -> &str {
        &self.reference_token
    }

    /// The reference/stablecoin pool address (lowercase hex).
    pub fn anchor_pool(&self) -> &str {
        &self.anchor_pool
    }

    /// Minimum reference-asset value locked for a pool to qualify as a
    /// pricing source.
    pub fn minimum_reference_locked(&self) -> &BigDecimal {
        &self.minimum_reference_locked
    }

    pub fn is_reference(&self, token: &str) -> bool {
        self.reference_token == token.to_lowercase()
    }

    pub fn is_whitelisted(&self, token: &str) -> bool {
        let token_lower = token.to_lowercase();
        self.whitelist.iter().any(|t| *t == token_lower)
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        // Compiled-in defaults are known-valid addresses
        Self::from_settings(&PricingSettings::default()).expect("default anchor settings are valid")
    }
}
