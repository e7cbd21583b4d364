//! Timed digest run
//!
//! One measurement is: allocate the buffer, hash it once with `sha2` inside
//! an `Instant` window, then write `<hex digest> (<elapsed>)` followed by a
//! newline. Allocation and output are outside the timed window.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::Write;
use std::time::{Duration, Instant};

use log::info;
use sha2::{Digest as _, Sha256};

use crate::buffer::{BUFFER_LEN, Buffer};
use crate::error::BenchError;
use crate::primitives::Digest;

/// Outcome of a single timed hash.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub digest: Digest,
    pub elapsed: Duration,
}

impl Measurement {
    /// Throughput in MiB/s, or `None` if the clock did not advance.
    pub fn mib_per_sec(&self, len: usize) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();

        (secs > 0.0).then(|| len as f64 / (1024.0 * 1024.0) / secs)
    }
}

impl Display for Measurement {
    /// Renders `<digest> (<elapsed>)`, e.g.
    /// `20492a4d...9e0e (312.77ms)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({:?})", self.digest, self.elapsed)
    }
}

/// Hashes `buffer` once and times only the hash call.
pub fn measure(buffer: &Buffer) -> Measurement {
    let start = Instant::now();
    let hash = Sha256::digest(buffer.as_bytes());
    let elapsed = start.elapsed();

    let digest: [u8; Digest::LEN] = hash.into();

    Measurement {
        digest: Digest::from(digest),
        elapsed,
    }
}

/// Runs the full benchmark over [`BUFFER_LEN`] zero bytes and writes the
/// result line to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<Measurement, BenchError> {
    run_with_len(out, BUFFER_LEN)
}

pub(crate) fn run_with_len<W: Write>(out: &mut W, len: usize) -> Result<Measurement, BenchError> {
    let buffer = Buffer::with_len(len)?;
    let measurement = measure(&buffer);

    if let Some(rate) = measurement.mib_per_sec(buffer.len()) {
        info!("hashed {} bytes at {rate:.1} MiB/s", buffer.len());
    }

    writeln!(out, "{measurement}")?;
    out.flush()?;

    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_allocation_writes_nothing() {
        let mut out = Vec::new();

        let err = run_with_len(&mut out, usize::MAX).unwrap_err();

        assert!(matches!(err, BenchError::ResourceExhaustion { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn small_buffer_line() {
        let mut out = Vec::new();

        let measurement = run_with_len(&mut out, 0).unwrap();

        // SHA-256 of the empty message.
        assert_eq!(
            measurement.digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with(&format!("{} (", measurement.digest)));
        assert!(line.ends_with(")\n"));
    }

    #[test]
    fn throughput_requires_elapsed_time() {
        let m = Measurement {
            digest: Digest::default(),
            elapsed: Duration::ZERO,
        };
        assert_eq!(m.mib_per_sec(1024), None);

        let m = Measurement {
            digest: Digest::default(),
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(m.mib_per_sec(4 * 1024 * 1024), Some(2.0));
    }
}
