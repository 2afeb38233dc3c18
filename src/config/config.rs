use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Price discovery configuration.
///
/// Identifies the trusted anchors for a deployment:
/// - The reference (wrapped native) token used as the pricing intermediary
/// - The anchor pool pairing the reference token with a major stablecoin
/// - The whitelist of tokens trusted for price discovery and volume tracking
///
/// All defaults correspond to the reference deployment, so a config file is
/// only needed to point the core at a different chain.
#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    /// Wrapped native token address (the reference asset)
    #[serde(default = "default_reference_token")]
    pub reference_token: String,
    /// Reference/stablecoin pool used to resolve the reference USD price
    #[serde(default = "default_anchor_pool")]
    pub anchor_pool: String,
    /// Token addresses trusted as pricing anchors, in priority order
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,
    /// Minimum reference-asset value locked for a pool to qualify as a
    /// pricing source. Decimal string so thresholds below one unit work.
    #[serde(default = "default_minimum_reference_locked")]
    pub minimum_reference_locked: String,
}

fn default_reference_token() -> String {
    "0x85119527cf38f6ccf7b1b8f8fad05145358aaa81".to_string()
}

fn default_anchor_pool() -> String {
    "0xeac8c29642b12231240bbc22004c8182d62d1c1a".to_string()
}

fn default_whitelist() -> Vec<String> {
    vec![
        // wrapped native
        "0x85119527cf38f6ccf7b1b8f8fad05145358aaa81".to_string(),
        // stablecoins
        "0x853e38d0b35d2df54d3d91c210b7bd7749d614e8".to_string(),
        "0x5d2d4baa31e79777383ac407d45495b44d0140b7".to_string(),
    ]
}

fn default_minimum_reference_locked() -> String {
    "0".to_string()
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            reference_token: default_reference_token(),
            anchor_pool: default_anchor_pool(),
            whitelist: default_whitelist(),
            minimum_reference_locked: default_minimum_reference_locked(),
        }
    }
}

/// Root application configuration.
///
/// Loaded from `config.{yaml,toml,json}` at startup when present; every
/// field falls back to the compiled-in deployment constants otherwise.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub pricing: PricingSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config").required(false))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
