#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// compute image histogram module.
pub mod histogram;

/// utilities for interpolation.
pub mod interpolation;

/// restrict operations to the pixels selected by a clipping mask.
pub mod mask;

/// the closed catalogue of image operations.
pub mod ops;

/// utility functions for resizing images.
pub mod resize;

pub use ops::{Operation, ParseOperationError};
