//! SHA-256 timing over a fixed in-memory buffer
//!
//! This crate measures how long one SHA-256 pass takes over 100 MiB of zero
//! bytes and reports the digest together with the elapsed time.
//!
//! # Module overview
//!
//! - `buffer`
//!   Fallible allocation of the zero-filled input buffer. Allocation failure
//!   is surfaced as an error value instead of aborting the process.
//!
//! - `runner`
//!   The measurement itself: hash the buffer once inside a monotonic timing
//!   window and write a single `<hex digest> (<elapsed>)` line.
//!
//! - `hash`
//!   A portable, dependency-free SHA-256 (FIPS 180-4). The timed run uses
//!   the RustCrypto `sha2` crate; this implementation is kept as a
//!   cross-checked alternative and is compared against `sha2` in the
//!   benches.
//!
//! - `primitives`
//!   The fixed-size `Digest` value shared by both implementations.
//!
//! - `error`
//!   The crate error type.

mod utils;

pub mod buffer;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod runner;

pub use buffer::{BUFFER_LEN, Buffer};
pub use error::BenchError;
pub use primitives::Digest;
pub use runner::{Measurement, measure, run};
pub use utils::logging;
