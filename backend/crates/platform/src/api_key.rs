//! API Key Registry
//!
//! Opaque API keys accepted by the gateway. Only SHA-256 digests are kept
//! in memory; lookups compare digests in constant time.

use std::fmt;

use crate::crypto::{constant_time_eq, sha256, short_hex};

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Non-secret label of an accepted key (first 8 digest bytes, hex).
///
/// Used as the throttling bucket key and as a log field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiKeyId(String);

impl ApiKeyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of accepted API keys
#[derive(Clone, Default)]
pub struct ApiKeySet {
    digests: Vec<[u8; 32]>,
}

impl ApiKeySet {
    /// Build from raw keys. Blank entries are skipped.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let digests = keys
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .map(|k| sha256(k.as_bytes()))
            .collect();
        Self { digests }
    }

    /// Parse a comma-separated list (the `API_KEYS` format)
    pub fn parse(list: &str) -> Self {
        Self::from_keys(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Check a presented key. Returns its label when accepted.
    ///
    /// Every configured digest is compared so the time taken does not
    /// depend on which entry matched.
    pub fn verify(&self, presented: &str) -> Option<ApiKeyId> {
        let digest = sha256(presented.as_bytes());
        let mut matched = false;
        for known in &self.digests {
            matched |= constant_time_eq(known, &digest);
        }
        matched.then(|| ApiKeyId(short_hex(&digest, 8)))
    }
}

impl fmt::Debug for ApiKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeySet")
            .field("keys", &self.digests.len())
            .finish()
    }
}
