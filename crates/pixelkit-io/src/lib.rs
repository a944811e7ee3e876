#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and PPM parsing failures.
pub mod error;

/// Plain-text PPM (P3) encoding and decoding.
///
/// Read and write 8-bit RGB images as whitespace separated ASCII samples.
pub mod ppm;

pub use crate::error::IoError;
