use std::io;
use std::process::ExitCode;

use anyhow::Context;
use log::error;

use hashbench::{Measurement, logging, runner};

/// Maps the outcome of a run to the process exit status, logging failures.
fn exit_status(result: anyhow::Result<Measurement>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            error!("{err:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let stdout = io::stdout();
    let result = runner::run(&mut stdout.lock()).context("sha256 benchmark failed");

    ExitCode::from(exit_status(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use hashbench::{BenchError, Digest};

    #[test]
    fn success_exits_zero() {
        let measurement = Measurement {
            digest: Digest::default(),
            elapsed: Duration::from_millis(1),
        };

        assert_eq!(exit_status(Ok(measurement)), 0);
    }

    #[test]
    fn allocation_failure_exits_non_zero() {
        let source = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = BenchError::ResourceExhaustion {
            requested: usize::MAX,
            source,
        };

        assert_eq!(exit_status(Err(err.into())), 1);
    }

    #[test]
    fn output_failure_exits_non_zero() {
        let err = BenchError::Output(io::Error::from(io::ErrorKind::BrokenPipe));

        assert_eq!(exit_status(Err(err.into())), 1);
    }
}
