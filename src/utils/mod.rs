//! Utility functions for the Tidemark pricing core.
//!
//! Address normalization and hex encoding helpers shared by the
//! configuration layer and the entity models.

use alloy::primitives::{hex, Address};

// ============================================
// Common Constants
// ============================================

/// The Ethereum zero address (0x0000000000000000000000000000000000000000)
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// ============================================
// Address Helpers
// ============================================

/// Encode bytes as a lowercase hex string with 0x prefix.
pub fn hex_encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Normalize an address string to lowercase 0x-prefixed hex.
///
/// Returns `None` if the input is not a valid 20-byte address. All entity
/// keys and whitelist entries go through this so string comparison is
/// sufficient everywhere else.
pub fn normalize_address(address: &str) -> Option<String> {
    let parsed: Address = address.parse().ok()?;
    Some(hex_encode(parsed.as_slice()))
}
