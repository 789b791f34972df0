//! Short BLAKE3 fingerprints of produced ciphertext.
//!
//! Both destinations of a style receive the same bytes; the fingerprint shown
//! in the run summary lets an operator confirm that at a glance.

use std::fmt::{Display, Formatter, Result};

/// Number of hex characters shown for a fingerprint.
const DISPLAY_LEN: usize = 12;

/// BLAKE3 digest of a ciphertext buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    hash: blake3::Hash,
}

impl Fingerprint {
    #[inline]
    pub fn of(data: &[u8]) -> Self {
        Self { hash: blake3::hash(data) }
    }

    /// Full 64-character hex digest.
    pub fn to_hex(&self) -> String {
        self.hash.to_hex().to_string()
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.hash.to_hex()[..DISPLAY_LEN])
    }
}
