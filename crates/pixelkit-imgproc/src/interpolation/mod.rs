//! Pixel interpolation methods for image resampling.
//!
//! Samples are reconstructed at fractional `(row, col)` coordinates from the
//! surrounding integer positions. Positions outside the source image read as
//! zero, the same policy used by convolution.

mod bilinear;

pub use bilinear::{bilinear_interpolation, upper_neighbor};
