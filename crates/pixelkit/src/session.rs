use std::collections::HashMap;

use pixelkit_image::{ErrorKind, Image, ImageError};
use pixelkit_imgproc::{
    histogram::{HistogramOptions, Histograms},
    mask, Operation,
};

/// An error type for session bookkeeping.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No image is stored under the given name.
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// No mask image is stored under the given name.
    #[error("Mask not found: {0}")]
    MaskNotFound(String),

    /// The operation itself failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl SessionError {
    /// The broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::ImageNotFound(_) | SessionError::MaskNotFound(_) => {
                ErrorKind::Precondition
            }
            SessionError::Image(e) => e.kind(),
        }
    }
}

/// Named images and the operations between them.
///
/// Operations never modify their source; the result is stored under the
/// destination name, replacing whatever was there.
///
/// # Example
///
/// ```
/// use pixelkit::{image::{Image, Sample}, imgproc::Operation, Session};
///
/// let mut session = Session::new();
/// session.insert("koala", Image::from_size_val([2, 2].into(), Sample::from_rgb(255, 0, 0)));
/// session.apply("koala", &Operation::Grayscale, "koala-gray").unwrap();
///
/// let gray = session.get("koala-gray").unwrap();
/// assert_eq!(gray.get(0, 0), Some(&Sample::gray(54)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    images: HashMap<String, Image>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `image` under `name`, returning the image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) -> Option<Image> {
        let name = name.into();
        log::debug!("storing {} image as {name}", image.size());
        self.images.insert(name, image)
    }

    /// The image stored under `name`.
    pub fn get(&self, name: &str) -> Result<&Image, SessionError> {
        self.images
            .get(name)
            .ok_or_else(|| SessionError::ImageNotFound(name.to_string()))
    }

    /// Remove and return the image stored under `name`.
    pub fn remove(&mut self, name: &str) -> Result<Image, SessionError> {
        self.images
            .remove(name)
            .ok_or_else(|| SessionError::ImageNotFound(name.to_string()))
    }

    /// The stored names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no image is stored.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Apply `op` to the image `src` and store the result as `dst`.
    ///
    /// On error nothing is stored.
    pub fn apply(&mut self, src: &str, op: &Operation, dst: &str) -> Result<(), SessionError> {
        let out = op.apply(self.get(src)?)?;
        log::debug!("{op}: {src} -> {dst}");
        self.images.insert(dst.to_string(), out);
        Ok(())
    }

    /// Apply `op` to the image `src` where the image `mask` is black, and store
    /// the result as `dst`.
    ///
    /// On error nothing is stored.
    pub fn apply_masked(
        &mut self,
        src: &str,
        mask_name: &str,
        op: &Operation,
        dst: &str,
    ) -> Result<(), SessionError> {
        let image = self.get(src)?;
        let clip = self
            .images
            .get(mask_name)
            .ok_or_else(|| SessionError::MaskNotFound(mask_name.to_string()))?;
        let out = mask::apply_masked(image, clip, op)?;
        log::debug!("{op} masked by {mask_name}: {src} -> {dst}");
        self.images.insert(dst.to_string(), out);
        Ok(())
    }

    /// The normalized histograms of the image `name`.
    pub fn histograms(
        &self,
        name: &str,
        options: &HistogramOptions,
    ) -> Result<Histograms, SessionError> {
        Ok(Histograms::from_image(self.get(name)?).normalize(options))
    }
}
