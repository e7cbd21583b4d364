use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors produced while preparing or reporting a measurement.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for the input buffer")]
    ResourceExhaustion {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The result line could not be written.
    #[error("failed to write the measurement")]
    Output(#[from] io::Error),
}
