#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pixelkit_image as image;

#[doc(inline)]
pub use pixelkit_imgproc as imgproc;

#[doc(inline)]
pub use pixelkit_io as io;

/// A table of named images that operations read from and write into.
pub mod session;

pub use session::{Session, SessionError};
