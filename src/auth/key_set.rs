//! The set of accepted API keys
//!
//! Keys are stored as SHA-256 digests. Every comparison runs over fixed-size
//! digests with `subtle`, so neither the position of the first differing byte
//! nor a length mismatch changes the work done per key, and the whole set is
//! always scanned.

use sha2::{Digest, Sha256};
use std::fmt;
use subtle::{Choice, ConstantTimeEq};

type KeyDigest = [u8; 32];

/// Immutable set of shared secrets, built once at startup
#[derive(Clone, Default)]
pub struct KeySet {
    digests: Vec<KeyDigest>,
}

impl KeySet {
    /// Parse a comma-separated key list, trimming entries and dropping empty ones
    pub fn parse(raw: &str) -> Self {
        raw.split(',').map(str::trim).collect()
    }

    /// Read and parse the key list from an environment variable
    ///
    /// A missing or non-UTF-8 variable yields an empty set; the guard then
    /// fails closed.
    pub fn from_env(var: &str) -> Self {
        std::env::var(var)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Constant-time membership test
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate_digest = digest(candidate);

        let mut found = Choice::from(0u8);
        for key in &self.digests {
            found |= key.as_slice().ct_eq(candidate_digest.as_slice());
        }

        found.into()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let digests = iter
            .into_iter()
            .filter(|key| !key.as_ref().is_empty())
            .map(|key| digest(key.as_ref()))
            .collect();
        Self { digests }
    }
}

// Never print key material, not even digests
impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySet")
            .field("keys", &self.digests.len())
            .finish_non_exhaustive()
    }
}

fn digest(value: &str) -> KeyDigest {
    Sha256::digest(value.as_bytes()).into()
}
