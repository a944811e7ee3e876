use pixelkit_image::{Image, Sample};

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.2126 * R + 0.7152 * G + 0.0722 * B
///
/// truncated to an integer and replicated over the three channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new image of neutral samples with the same size.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::color::gray_from_rgb;
///
/// let image = Image::from_size_val([4, 5].into(), Sample::from_rgb(255, 0, 0));
/// let gray = gray_from_rgb(&image);
///
/// assert_eq!(gray.size(), image.size());
/// assert_eq!(gray.get(0, 0), Some(&Sample::gray(54)));
/// ```
pub fn gray_from_rgb(src: &Image) -> Image {
    src.map(Sample::to_grayscale)
}

/// Visualize the luma of every pixel as a neutral sample.
pub fn luma_from_rgb(src: &Image) -> Image {
    src.map(|s| Sample::gray(s.luma()))
}

/// Visualize the intensity (truncated channel mean) of every pixel.
pub fn intensity_from_rgb(src: &Image) -> Image {
    src.map(|s| Sample::gray(s.intensity()))
}

/// Visualize the value (largest channel) of every pixel.
pub fn value_from_rgb(src: &Image) -> Image {
    src.map(|s| Sample::gray(s.value()))
}

/// Keep only the red channel, replicated over the three channels.
pub fn red_component(src: &Image) -> Image {
    src.map(Sample::red_only)
}

/// Keep only the green channel, replicated over the three channels.
pub fn green_component(src: &Image) -> Image {
    src.map(Sample::green_only)
}

/// Keep only the blue channel, replicated over the three channels.
pub fn blue_component(src: &Image) -> Image {
    src.map(Sample::blue_only)
}
