use pixelkit_image::{Image, ImageError, ImageSize};

use crate::interpolation::bilinear_interpolation;

/// Map a target index onto the source axis: `index / target * source`.
///
/// A zero-length target axis maps everything onto 0.
fn source_coordinate(index: usize, target: usize, source: usize) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (index * source) as f64 / target as f64
}

/// Downsize an image with bilinear interpolation.
///
/// The output grid covers target indices `0..=new_height` by `0..=new_width`,
/// so it is one row and one column larger than requested. Target `(row, col)`
/// samples the source at `(row * H / new_height, col * W / new_width)`; the
/// last row and column therefore sample just past the source border and pick
/// up the zero padding.
///
/// A zero `new_width` or `new_height` does not divide by zero: that axis is
/// sampled at coordinate 0, so the output copies the first source column or
/// row instead of turning black.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W).
/// * `new_width` - The requested width, at most W.
/// * `new_height` - The requested height, at most H.
///
/// # Returns
///
/// A new image of size `(new_width + 1) x (new_height + 1)`.
///
/// # Errors
///
/// Returns an error, before allocating anything, if either requested
/// dimension exceeds the current one.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::resize::downsize;
///
/// let image = Image::from_size_val([8, 6].into(), Sample::gray(90));
/// let small = downsize(&image, 4, 3).unwrap();
///
/// assert_eq!(small.width(), 5);
/// assert_eq!(small.height(), 4);
/// assert_eq!(small.get(0, 0), Some(&Sample::gray(90)));
/// assert!(downsize(&image, 9, 3).is_err());
/// ```
pub fn downsize(src: &Image, new_width: usize, new_height: usize) -> Result<Image, ImageError> {
    if new_width > src.width() || new_height > src.height() {
        return Err(ImageError::InvalidDownsizeSize(
            new_width,
            new_height,
            src.width(),
            src.height(),
        ));
    }

    let dst_size = ImageSize {
        width: new_width + 1,
        height: new_height + 1,
    };
    log::debug!("downsizing {} to {}", src.size(), dst_size);

    Ok(Image::from_fn(dst_size, |row, col| {
        let x = source_coordinate(row, new_height, src.height());
        let y = source_coordinate(col, new_width, src.width());
        bilinear_interpolation(src, x, y)
    }))
}
