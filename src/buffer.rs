//! Input buffer allocation
//!
//! The measured input is a single contiguous run of zero bytes. Allocation
//! goes through `Vec::try_reserve_exact` so that running out of memory is
//! reported as [`BenchError::ResourceExhaustion`] rather than aborting.

use log::info;

use crate::error::BenchError;

/// Size of the hashed buffer: 100 MiB.
pub const BUFFER_LEN: usize = 100 * 1024 * 1024;

/// Owned, zero-filled input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    /// Allocates [`BUFFER_LEN`] zero bytes.
    pub fn zeroed() -> Result<Self, BenchError> {
        Self::with_len(BUFFER_LEN)
    }

    /// Allocates `len` zero bytes.
    ///
    /// The full capacity is reserved up front, so the zero fill never
    /// reallocates.
    pub fn with_len(len: usize) -> Result<Self, BenchError> {
        let mut data = Vec::new();

        data.try_reserve_exact(len)
            .map_err(|source| BenchError::ResourceExhaustion {
                requested: len,
                source,
            })?;
        data.resize(len, 0);

        info!("allocated {len} byte input buffer");

        Ok(Buffer(data))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_fixed_length() {
        let buffer = Buffer::zeroed().unwrap();

        assert_eq!(buffer.len(), 104_857_600);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn impossible_allocation_is_resource_exhaustion() {
        let err = Buffer::with_len(usize::MAX).unwrap_err();

        match err {
            BenchError::ResourceExhaustion { requested, .. } => {
                assert_eq!(requested, usize::MAX)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_buffer() {
        let buffer = Buffer::with_len(0).unwrap();

        assert!(buffer.is_empty());
        assert_eq!(buffer.as_ref(), &[] as &[u8]);
    }
}
