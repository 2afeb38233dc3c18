mod anchors;
mod config;

pub use self::anchors::AnchorSet;
pub use self::config::{PricingSettings, Settings};
