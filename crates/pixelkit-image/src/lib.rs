#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// A single RGB colour sample and its derived projections.
pub mod sample;

/// image representation as a row-major grid of samples.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::{ErrorKind, ImageError};
pub use crate::image::{Image, ImageSize};
pub use crate::sample::{Channel, Sample};
