pub mod config;
pub mod metadata;
pub mod pricing;
pub mod store;
pub mod utils;

pub use self::config::{AnchorSet, Settings};
pub use metadata::{NullMetadata, StaticMetadata, TokenMetadataSource};
pub use pricing::{AdjustedAmounts, PriceEngine};
pub use store::{EntityStore, MemoryStore};
