/// Coarse classification of an [`ImageError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was outside its accepted range.
    Validation,
    /// Two images, or an image and a requested size, do not agree.
    Dimension,
    /// The referent of an operation does not exist.
    Precondition,
}

/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when a channel value is outside [0, 255].
    #[error("Invalid {0} channel value: {1} (expected 0..=255)")]
    InvalidChannelValue(&'static str, i32),

    /// Error when a brightness delta is outside [-255, 255].
    #[error("Invalid brightness delta: {0} (expected -255..=255)")]
    InvalidBrightness(i32),

    /// Error when the kernel is not an odd square matrix.
    #[error("Invalid kernel: size {0} with {1} weights")]
    InvalidKernelSize(usize, usize),

    /// Error when the number of samples does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel count of an image size does not fit in memory.
    #[error("Image size {0}x{1} is too large")]
    ImageSizeOverflow(usize, usize),

    /// Error when a pixel coordinate is outside the image.
    #[error("Pixel index out of bounds: row {0}, col {1} in a {2}x{3} image")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when two image sizes do not match.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a downsize target is larger than the source.
    #[error("Cannot downsize a {2}x{3} image to {0}x{1}")]
    InvalidDownsizeSize(usize, usize, usize, usize),

    /// Error when a geometric operation is requested through a mask.
    #[error("Operation {0} cannot be restricted by a mask")]
    UnsupportedMaskedOperation(&'static str),
}

impl ImageError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageError::InvalidImageSize(..)
            | ImageError::InvalidDownsizeSize(..)
            | ImageError::ImageSizeOverflow(..) => ErrorKind::Dimension,
            _ => ErrorKind::Validation,
        }
    }
}
