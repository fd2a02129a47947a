//! Cryptographic Utilities
//!
//! Digest helpers used by the API-key gate. Keys are only ever held and
//! compared as SHA-256 digests.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Lowercase hex of the first `len` bytes of a digest.
///
/// Used to name a key in logs without revealing it.
pub fn short_hex(digest: &[u8], len: usize) -> String {
    digest
        .iter()
        .take(len)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Equality whose running time depends only on the length of the inputs
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
