//! SHA-256 core hashing functions
//!
//! Block loop and message padding for the portable SHA-256. The round
//! function lives in `computations`.

use super::H256_INIT;
use super::computations::all_rounds;
use crate::primitives::Digest;

/// Size of one message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Compresses a single 512-bit message block into `state`.
///
/// Words are read big-endian.
///
/// ```
/// use hashbench::hash::sha256::{H256_INIT, core::compress};
///
/// let mut state = H256_INIT;
/// compress(&[0u8; 64], &mut state);
/// ```
///
/// Blocks of any other length are rejected at compile time:
///
/// ```compile_fail
/// use hashbench::hash::sha256::{H256_INIT, core::compress};
///
/// let mut state = H256_INIT;
/// compress(&[1u8; 32], &mut state);
/// ```
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, word) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }

    #[cfg(not(feature = "speed"))]
    all_rounds(state, w);

    #[cfg(feature = "speed")]
    all_rounds(state, &mut w);
}

/// Computes the SHA-256 digest of `input` in one pass.
///
/// Full blocks are compressed directly from the input. The tail is copied
/// into a scratch block, followed by the `0x80` marker and the message
/// length in bits as a 64-bit big-endian integer. When fewer than nine
/// bytes remain after the tail, the length spills into an extra block.
pub fn sha256(input: &[u8]) -> Digest {
    let mut state = H256_INIT;

    let mut tail = input;

    while let Some((block, rest)) = tail.split_first_chunk::<BLOCK_LEN>() {
        compress(block, &mut state);
        tail = rest;
    }

    let mut block = [0u8; BLOCK_LEN];

    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    if tail.len() > 55 {
        compress(&block, &mut state);
        block = [0; BLOCK_LEN];
    }

    let bit_len = (input.len() as u64) << 3;
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    Digest::from(state)
}
