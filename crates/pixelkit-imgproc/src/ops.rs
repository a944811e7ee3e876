use std::str::FromStr;

use pixelkit_image::{Image, ImageError, Sample};

use crate::{color, enhance, filter, flip, resize};

/// Error returned when an operation name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct ParseOperationError(pub String);

/// The closed catalogue of image operations.
///
/// Every variant is dispatched through [`Operation::apply`]; the same value
/// can be restricted to a clipping mask with [`crate::mask::apply_masked`].
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::Operation;
///
/// let image = Image::from_size_val([2, 2].into(), Sample::from_rgb(200, 100, 0));
/// let red = Operation::RedComponent.apply(&image).unwrap();
///
/// assert_eq!(red.get(0, 0), Some(&Sample::gray(200)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Keep the red channel as a gray level.
    RedComponent,
    /// Keep the green channel as a gray level.
    GreenComponent,
    /// Keep the blue channel as a gray level.
    BlueComponent,
    /// Visualize the truncated channel mean.
    Intensity,
    /// Visualize the weighted luma.
    Luma,
    /// Visualize the largest channel.
    Value,
    /// Weighted-luma grayscale.
    Grayscale,
    /// Sepia tone.
    Sepia,
    /// 3x3 blur.
    Blur,
    /// 5x5 sharpen.
    Sharpen,
    /// Add a delta in `-255..=255` to every channel.
    Brighten(i32),
    /// Reverse the columns.
    HorizontalFlip,
    /// Reverse the rows.
    VerticalFlip,
    /// Bilinear downsize, see [`resize::downsize`].
    Downsize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

impl Operation {
    /// Apply the operation to a whole image.
    ///
    /// The source is never modified; the result is always a new image.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation parameters are invalid for `src`.
    pub fn apply(&self, src: &Image) -> Result<Image, ImageError> {
        let dst = match *self {
            Operation::RedComponent => color::red_component(src),
            Operation::GreenComponent => color::green_component(src),
            Operation::BlueComponent => color::blue_component(src),
            Operation::Intensity => color::intensity_from_rgb(src),
            Operation::Luma => color::luma_from_rgb(src),
            Operation::Value => color::value_from_rgb(src),
            Operation::Grayscale => color::gray_from_rgb(src),
            Operation::Sepia => color::sepia_from_rgb(src),
            Operation::Blur => filter::blur(src),
            Operation::Sharpen => filter::sharpen(src),
            Operation::Brighten(delta) => enhance::adjust_brightness(src, delta)?,
            Operation::HorizontalFlip => flip::horizontal_flip(src),
            Operation::VerticalFlip => flip::vertical_flip(src),
            Operation::Downsize { width, height } => resize::downsize(src, width, height)?,
        };
        Ok(dst)
    }

    /// Whether the result at a position depends only on that position and its
    /// neighborhood, so the operation can be restricted to a mask.
    pub fn supports_mask(&self) -> bool {
        !matches!(
            self,
            Operation::HorizontalFlip | Operation::VerticalFlip | Operation::Downsize { .. }
        )
    }

    /// Check the scalar parameters that do not depend on an image.
    ///
    /// # Errors
    ///
    /// Returns an error for a brightness delta outside `-255..=255`.
    pub fn validate(&self) -> Result<(), ImageError> {
        if let Operation::Brighten(delta) = *self {
            pixelkit_image::sample::check_brightness(delta)?;
        }
        Ok(())
    }

    /// Build an evaluator of the operation at a single position of an image.
    ///
    /// Convolution kernels are built once here, not per evaluated position.
    ///
    /// PRECONDITION: [`Operation::supports_mask`] and [`Operation::validate`]
    /// hold, and every evaluated `(row, col)` is inside the image.
    pub(crate) fn pixel_fn(&self) -> impl Fn(&Image, usize, usize) -> Sample {
        let op = *self;
        let kernel = match op {
            Operation::Blur => Some(filter::Kernel::blur()),
            Operation::Sharpen => Some(filter::Kernel::sharpen()),
            _ => None,
        };
        move |src: &Image, row: usize, col: usize| {
            if let Some(kernel) = &kernel {
                return filter::convolve_at(src, kernel, row, col);
            }
            let px = src.as_slice()[row * src.width() + col];
            match op {
                Operation::RedComponent => px.red_only(),
                Operation::GreenComponent => px.green_only(),
                Operation::BlueComponent => px.blue_only(),
                Operation::Intensity => Sample::gray(px.intensity()),
                Operation::Luma => Sample::gray(px.luma()),
                Operation::Value => Sample::gray(px.value()),
                Operation::Grayscale => px.to_grayscale(),
                Operation::Sepia => px.to_sepia(),
                Operation::Brighten(delta) => px.saturating_add(delta),
                Operation::Blur
                | Operation::Sharpen
                | Operation::HorizontalFlip
                | Operation::VerticalFlip
                | Operation::Downsize { .. } => px,
            }
        }
    }

    /// The command name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RedComponent => "red-component",
            Operation::GreenComponent => "green-component",
            Operation::BlueComponent => "blue-component",
            Operation::Intensity => "intensity-component",
            Operation::Luma => "luma-component",
            Operation::Value => "value-component",
            Operation::Grayscale => "greyscale",
            Operation::Sepia => "sepia",
            Operation::Blur => "blur",
            Operation::Sharpen => "sharpen",
            Operation::Brighten(_) => "brighten",
            Operation::HorizontalFlip => "horizontal-flip",
            Operation::VerticalFlip => "vertical-flip",
            Operation::Downsize { .. } => "downsize",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operation::Brighten(delta) => write!(f, "brighten {delta}"),
            Operation::Downsize { width, height } => write!(f, "downsize {width} {height}"),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Parse a parameterless operation by its command name.
    ///
    /// `brighten` and `downsize` carry parameters and are built directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_lowercase().as_str() {
            "red-component" => Operation::RedComponent,
            "green-component" => Operation::GreenComponent,
            "blue-component" => Operation::BlueComponent,
            "intensity-component" => Operation::Intensity,
            "luma-component" => Operation::Luma,
            "value-component" => Operation::Value,
            "greyscale" | "grayscale" => Operation::Grayscale,
            "sepia" => Operation::Sepia,
            "blur" => Operation::Blur,
            "sharpen" => Operation::Sharpen,
            "horizontal-flip" => Operation::HorizontalFlip,
            "vertical-flip" => Operation::VerticalFlip,
            _ => return Err(ParseOperationError(s.to_string())),
        };
        Ok(op)
    }
}
