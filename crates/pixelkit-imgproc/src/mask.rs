use pixelkit_image::{Image, ImageError, Sample};

use crate::ops::Operation;

/// Apply an operation only where the clipping mask is pure black.
///
/// Every result is computed from the unmodified source, so neighborhood
/// operations like blur read the unfiltered neighbors even when those
/// neighbors are themselves selected. Positions where the mask is any other
/// colour keep their source value.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `mask` - The clipping mask, same size as `src`.
/// * `op` - The operation to restrict.
///
/// # Returns
///
/// A new image; `src` is left untouched.
///
/// # Errors
///
/// * [`ImageError::InvalidImageSize`] if the mask size differs from the source.
/// * [`ImageError::UnsupportedMaskedOperation`] for geometric operations.
/// * Any parameter error of `op`, raised before a pixel is written.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::{mask::apply_masked, Operation};
///
/// let image = Image::from_size_val([2, 1].into(), Sample::from_rgb(200, 10, 10));
/// let mask = Image::from_fn([2, 1].into(), |_, c| {
///     if c == 0 { Sample::BLACK } else { Sample::WHITE }
/// });
///
/// let out = apply_masked(&image, &mask, &Operation::RedComponent).unwrap();
/// assert_eq!(out.get(0, 0), Some(&Sample::gray(200)));
/// assert_eq!(out.get(0, 1), Some(&Sample::from_rgb(200, 10, 10)));
/// ```
pub fn apply_masked(src: &Image, mask: &Image, op: &Operation) -> Result<Image, ImageError> {
    if src.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            mask.width(),
            mask.height(),
        ));
    }

    if !op.supports_mask() {
        return Err(ImageError::UnsupportedMaskedOperation(op.name()));
    }

    op.validate()?;

    let eval = op.pixel_fn();
    let mut selected = 0usize;
    let dst = Image::from_fn(src.size(), |row, col| {
        let idx = row * src.width() + col;
        if mask.as_slice()[idx] == Sample::BLACK {
            selected += 1;
            eval(src, row, col)
        } else {
            src.as_slice()[idx]
        }
    });

    log::debug!(
        "{op} applied to {selected} of {} pixels through the mask",
        src.size().area()
    );

    Ok(dst)
}
