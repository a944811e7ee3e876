/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image from the decoded samples.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixelkit_image::ImageError),

    /// The stream does not start with the `P3` magic number.
    #[error("Invalid PPM header: expected P3, found {0}")]
    InvalidPpmHeader(String),

    /// The stream ended before the named field was read.
    #[error("Unexpected end of PPM data while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token could not be parsed as an integer.
    #[error("Invalid PPM token {1:?} while reading {0}")]
    InvalidToken(&'static str, String),

    /// The declared maximum sample value is outside `1..=255`.
    #[error("Unsupported PPM max value {0}, only 8-bit samples are supported")]
    UnsupportedMaxValue(i64),
}
