mod conv;
mod core;

pub use self::core::Digest;
