use pixelkit_image::{sample::check_brightness, Image, ImageError};

/// Adjust the brightness of an image.
///
/// Adds `delta` to every channel of every pixel, saturating each channel to
/// `[0, 255]` on its own:
///
/// dst(x,y,c) = clamp(src(x,y,c) + delta, 0, 255)
///
/// # Arguments
///
/// * `src` - The input image.
/// * `delta` - The amount to add, in `-255..=255`. Negative values darken.
///
/// # Returns
///
/// A new image with adjusted brightness.
///
/// # Errors
///
/// Returns an error if `delta` is out of range. The check happens before any
/// pixel is touched.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::enhance::adjust_brightness;
///
/// let image = Image::from_size_val([2, 2].into(), Sample::from_rgb(250, 10, 0));
/// let brighter = adjust_brightness(&image, 10).unwrap();
///
/// assert_eq!(brighter.get(0, 0), Some(&Sample::from_rgb(255, 20, 10)));
/// assert!(adjust_brightness(&image, 300).is_err());
/// ```
pub fn adjust_brightness(src: &Image, delta: i32) -> Result<Image, ImageError> {
    check_brightness(delta)?;
    Ok(src.map(|s| s.saturating_add(delta)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelkit_image::Sample;

    #[test]
    fn test_adjust_brightness() -> Result<(), ImageError> {
        let image = Image::new(
            [2, 1].into(),
            vec![Sample::new(0, 128, 255)?, Sample::new(10, 20, 30)?],
        )?;

        let darker = adjust_brightness(&image, -20)?;
        assert_eq!(
            darker.as_slice(),
            &[Sample::from_rgb(0, 108, 235), Sample::from_rgb(0, 0, 10)]
        );

        let same = adjust_brightness(&image, 0)?;
        assert_eq!(same, image);
        Ok(())
    }

    #[test]
    fn test_adjust_brightness_invalid() {
        let image = Image::from_size_val([1, 1].into(), Sample::WHITE);
        assert_eq!(
            adjust_brightness(&image, -256),
            Err(ImageError::InvalidBrightness(-256))
        );
        assert_eq!(
            adjust_brightness(&image, 256),
            Err(ImageError::InvalidBrightness(256))
        );
    }

    #[test]
    fn test_adjust_brightness_matches_sample() -> Result<(), ImageError> {
        let s = Sample::new(3, 140, 252)?;
        let image = Image::from_size_val([3, 2].into(), s);
        for d in [-255, -4, 0, 4, 255] {
            let out = adjust_brightness(&image, d)?;
            assert!(out.as_slice().iter().all(|px| Ok(*px) == s.brighten(d)));
        }
        Ok(())
    }
}
