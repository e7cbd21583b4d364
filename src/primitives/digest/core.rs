//! 256-bit hash output
//!
//! `Digest` is a plain value type holding the 32 bytes produced by
//! SHA-256, in the order the algorithm emits them (big-endian state words).
//! Rendering is lowercase hexadecimal with no prefix and no separators.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// A 32-byte SHA-256 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Length of a digest in bytes.
    pub const LEN: usize = 32;

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the 64-character lowercase hexadecimal form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_hex())
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        f.write_str(&self.to_hex())
    }
}
