use pixelkit_image::Image;

/// Flip the input image horizontally.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W).
///
/// # Returns
///
/// A new image with the columns of every row in reverse order.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, ImageSize, Sample};
/// use pixelkit_imgproc::flip::horizontal_flip;
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     Sample::BLACK,
/// );
///
/// let flipped = horizontal_flip(&image);
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip(src: &Image) -> Image {
    let cols = src.cols();
    Image::from_fn(src.size(), |row, col| src.row(row)[cols - 1 - col])
}

/// Flip the input image vertically.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W).
///
/// # Returns
///
/// A new image with the rows in reverse order.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, ImageSize, Sample};
/// use pixelkit_imgproc::flip::vertical_flip;
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     Sample::BLACK,
/// );
///
/// let flipped = vertical_flip(&image);
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn vertical_flip(src: &Image) -> Image {
    let rows = src.rows();
    Image::from_fn(src.size(), |row, col| src.row(rows - 1 - row)[col])
}
