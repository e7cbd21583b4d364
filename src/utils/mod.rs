//! Supporting utilities
//!
//! Environment-facing helpers that are not part of the measurement itself.

pub mod logging;
