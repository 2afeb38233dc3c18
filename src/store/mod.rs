//! Entity store contract and in-memory implementation.
//!
//! All entities are owned by an external persistent store; the pricing
//! core reads transient copies and writes back through the save contract.
//! Loads express "not yet observed" as `None` and are never an error.

use anyhow::Result;

mod memory;
pub mod models;

pub use memory::MemoryStore;

use models::{Bundle, Pool, Token};

/// Key-value load/save access to Token, Pool, and the Bundle singleton.
///
/// Every load re-reads current state: the core never caches entity data
/// across invocations, so each event sees the result of all prior events'
/// writes.
pub trait EntityStore {
    fn token(&self, address: &str) -> Option<Token>;
    fn pool(&self, address: &str) -> Option<Pool>;
    fn bundle(&self) -> Option<Bundle>;

    fn save_token(&mut self, token: &Token) -> Result<()>;
    fn save_pool(&mut self, pool: &Pool) -> Result<()>;
    fn save_bundle(&mut self, bundle: &Bundle) -> Result<()>;
}
