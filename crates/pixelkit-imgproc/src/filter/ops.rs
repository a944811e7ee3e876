use pixelkit_image::{Channel, Image, Sample};

use super::Kernel;

/// Evaluate `kernel` centered at a single position of `src`.
///
/// Neighbors outside the image contribute 0 (zero padding). Each channel is
/// clamped to `[0, 255]` and truncated.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The kernel to apply.
/// * `row` - The row of the target position.
/// * `col` - The column of the target position.
///
/// # Returns
///
/// The filtered sample at `(row, col)`.
pub fn convolve_at(src: &Image, kernel: &Kernel, row: usize, col: usize) -> Sample {
    let half = kernel.half_extent() as isize;
    let (row, col) = (row as isize, col as isize);

    let mut sums = [0.0f64; 3];
    for ky in 0..kernel.size() {
        let r = row - half + ky as isize;
        for kx in 0..kernel.size() {
            let c = col - half + kx as isize;
            let w = kernel.weight(ky, kx);
            for (sum, ch) in sums.iter_mut().zip(Channel::RGB) {
                *sum += f64::from(src.channel_or_zero(r, c, ch)) * w;
            }
        }
    }

    let [r, g, b] = sums.map(|v| v.clamp(0.0, 255.0) as u8);
    Sample::from_rgb(r, g, b)
}

/// Apply a kernel to every position of an image.
///
/// Reads exclusively from `src` and writes into a new image, so every output
/// sample sees the unfiltered neighborhood.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The kernel to apply.
///
/// # Returns
///
/// The filtered image with the same shape.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, Sample};
/// use pixelkit_imgproc::filter::{filter2d, Kernel};
///
/// let image = Image::from_size_val([4, 4].into(), Sample::WHITE);
/// let blurred = filter2d(&image, &Kernel::blur());
///
/// assert_eq!(blurred.get(1, 1), Some(&Sample::WHITE));
/// assert!(blurred.get(0, 0).unwrap().red() < 255);
/// ```
pub fn filter2d(src: &Image, kernel: &Kernel) -> Image {
    Image::from_fn(src.size(), |row, col| convolve_at(src, kernel, row, col))
}

/// Blur an image with the 3x3 blur kernel.
pub fn blur(src: &Image) -> Image {
    filter2d(src, &Kernel::blur())
}

/// Sharpen an image with the 5x5 sharpen kernel.
pub fn sharpen(src: &Image) -> Image {
    filter2d(src, &Kernel::sharpen())
}
