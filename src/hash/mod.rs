//! Hash algorithms implemented by the crate.
//!
//! Currently includes a portable, pure-Rust SHA-256.

pub mod sha256;

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;
