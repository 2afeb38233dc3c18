use anyhow::Result;
use chrono::Utc;
use rustc_hash::FxHashMap;

use super::models::{Bundle, Pool, Token};
use super::EntityStore;

/// In-memory entity store.
///
/// Backs the crate's tests and embedders that keep state in process.
/// Addresses are stored lowercase; lookups lowercase their input so any
/// casing works.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tokens: FxHashMap<String, Token>,
    pools: FxHashMap<String, Pool>,
    bundle: Option<Bundle>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}

impl EntityStore for MemoryStore {
    fn token(&self, address: &str) -> Option<Token> {
        self.tokens.get(&address.to_lowercase()).cloned()
    }

    fn pool(&self, address: &str) -> Option<Pool> {
        self.pools.get(&address.to_lowercase()).cloned()
    }

    fn bundle(&self) -> Option<Bundle> {
        self.bundle.clone()
    }

    fn save_token(&mut self, token: &Token) -> Result<()> {
        let mut token = token.clone();
        token.updated_at = Some(Utc::now());
        self.tokens.insert(token.address.clone(), token);
        Ok(())
    }

    fn save_pool(&mut self, pool: &Pool) -> Result<()> {
        let mut pool = pool.clone();
        pool.updated_at = Some(Utc::now());
        self.pools.insert(pool.address.clone(), pool);
        Ok(())
    }

    fn save_bundle(&mut self, bundle: &Bundle) -> Result<()> {
        let mut bundle = bundle.clone();
        bundle.updated_at = Some(Utc::now());
        self.bundle = Some(bundle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NullMetadata;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let token = Token::empty("0x0000000000000000000000000000000000000001", &NullMetadata);
        store.save_token(&token).unwrap();

        let loaded = store
            .token("0x0000000000000000000000000000000000000001")
            .unwrap();
        assert_eq!(loaded.address, token.address);
        assert!(loaded.updated_at.is_some());
    }

    #[test]
    fn missing_records_load_as_none() {
        let store = MemoryStore::new();
        assert!(store.token("0x0000000000000000000000000000000000000002").is_none());
        assert!(store.pool("0x0000000000000000000000000000000000000002").is_none());
        assert!(store.bundle().is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = MemoryStore::new();
        let token = Token::empty("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", &NullMetadata);
        store.save_token(&token).unwrap();

        assert!(store
            .token("0xA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48")
            .is_some());
    }
}
