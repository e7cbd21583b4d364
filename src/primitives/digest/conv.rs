//! Conversions between `Digest` and raw representations
//!
//! Byte conversions are the identity on the underlying array. Word
//! conversions serialize each 32-bit state word big-endian, which is how
//! SHA-256 turns its final state into output bytes.

use super::core::Digest;

impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

/// Converts eight 32-bit state words into a digest.
///
/// Words are ordered from first (`H0`) to last (`H7`).
impl From<[u32; 8]> for Digest {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
