//! Primitive types
//!
//! Fixed-size value types shared across the crate.
//!
//! Current primitives include:
//! - `Digest`: a 32-byte SHA-256 output

mod digest;

pub use digest::Digest;
