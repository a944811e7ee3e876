use pixelkit_image::{Channel, Image, Sample};

/// The integer coordinate above `v` used as the far interpolation corner.
///
/// An integral `v` is bumped one step further so the interpolation span never
/// collapses to zero width.
pub fn upper_neighbor(v: f64) -> f64 {
    if v.fract() == 0.0 {
        v + 1.0
    } else {
        v.ceil()
    }
}

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The fractional row coordinate.
/// * `y` - The fractional column coordinate.
///
/// # Returns
///
/// The interpolated sample, each channel truncated to an integer.
///
/// PRECONDITION: `x` and `y` are finite and non-negative.
pub fn bilinear_interpolation(image: &Image, x: f64, y: f64) -> Sample {
    let (x0, x1) = (x.floor(), upper_neighbor(x));
    let (y0, y1) = (y.floor(), upper_neighbor(y));

    let px = |r: f64, c: f64, ch: Channel| {
        f64::from(image.channel_or_zero(r as isize, c as isize, ch))
    };

    let [r, g, b] = Channel::RGB.map(|ch| {
        let near = px(x1, y0, ch) * (x - x0) + px(x0, y0, ch) * (x1 - x);
        let far = px(x1, y1, ch) * (x - x0) + px(x0, y1, ch) * (x1 - x);
        let v = far * (y - y0) + near * (y1 - y);
        v.clamp(0.0, 255.0) as u8
    });

    Sample::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixelkit_image::ImageError;

    #[test]
    fn test_upper_neighbor() {
        assert_relative_eq!(upper_neighbor(2.0), 3.0);
        assert_relative_eq!(upper_neighbor(2.25), 3.0);
        assert_relative_eq!(upper_neighbor(0.0), 1.0);
        assert_relative_eq!(upper_neighbor(0.999), 1.0);
    }

    #[test]
    fn test_integral_coordinates_are_exact() -> Result<(), ImageError> {
        let image = Image::new(
            [2, 2].into(),
            vec![
                Sample::new(10, 20, 30)?,
                Sample::new(40, 50, 60)?,
                Sample::new(70, 80, 90)?,
                Sample::new(100, 110, 120)?,
            ],
        )?;
        assert_eq!(bilinear_interpolation(&image, 0.0, 0.0), Sample::from_rgb(10, 20, 30));
        assert_eq!(bilinear_interpolation(&image, 1.0, 1.0), Sample::from_rgb(100, 110, 120));
        assert_eq!(bilinear_interpolation(&image, 2.0, 0.0), Sample::BLACK);
        Ok(())
    }

    #[test]
    fn test_fractional_coordinates() -> Result<(), ImageError> {
        let image = Image::new(
            [2, 2].into(),
            vec![
                Sample::gray(0),
                Sample::gray(100),
                Sample::gray(200),
                Sample::gray(100),
            ],
        )?;
        // halfway down the first column
        assert_eq!(bilinear_interpolation(&image, 0.5, 0.0), Sample::gray(100));
        // center of the four samples
        assert_eq!(bilinear_interpolation(&image, 0.5, 0.5), Sample::gray(100));
        // a quarter of the way along the first row
        assert_eq!(bilinear_interpolation(&image, 0.0, 0.25), Sample::gray(25));
        // past the last column the zero padding pulls the value down
        assert_eq!(bilinear_interpolation(&image, 0.0, 1.5), Sample::gray(50));
        Ok(())
    }
}
