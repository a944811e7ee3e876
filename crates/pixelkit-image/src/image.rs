use crate::error::ImageError;
use crate::sample::{Channel, Sample};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixelkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of pixels covered by this size, or `None` if it overflows.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

fn area_or_overflow(size: ImageSize) -> Result<usize, ImageError> {
    size.checked_area().ok_or(ImageError::ImageSizeOverflow(size.width, size.height))
}

/// Represents an image as a row-major grid of samples.
///
/// The grid always holds exactly `width * height` samples. Operations never
/// resize it in place: anything that changes the shape builds a new image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Sample>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The samples of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the pixel count of `size` overflows, or the length of the pixel data does not match
    /// the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelkit_image::{Image, ImageSize, Sample};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 3,
    ///     },
    ///     vec![Sample::BLACK; 2 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Sample>) -> Result<Self, ImageError> {
        let area = area_or_overflow(size)?;
        if data.len() != area {
            return Err(ImageError::InvalidChannelShape(data.len(), area));
        }
        Ok(Self { size, data })
    }

    /// Create a new image filled with the same sample.
    pub fn from_size_val(size: ImageSize, val: Sample) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a new image by evaluating `f(row, col)` at every position.
    pub fn from_fn(size: ImageSize, mut f: impl FnMut(usize, usize) -> Sample) -> Self {
        let mut data = Vec::with_capacity(size.area());
        for row in 0..size.height {
            for col in 0..size.width {
                data.push(f(row, col));
            }
        }
        Self { size, data }
    }

    /// Create a new image from interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// If `bytes` is not exactly `width * height * 3` long, or that length overflows, an
    /// error is returned.
    pub fn from_rgb_bytes(size: ImageSize, bytes: &[u8]) -> Result<Self, ImageError> {
        let expected = area_or_overflow(size)?
            .checked_mul(3)
            .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))?;
        if bytes.len() != expected {
            return Err(ImageError::InvalidChannelShape(bytes.len(), expected));
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| Sample::from_rgb(px[0], px[1], px[2]))
            .collect();
        Ok(Self { size, data })
    }

    /// Interleaved RGB bytes of the image, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|s| s.to_array()).collect()
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// The samples of the image in row-major order.
    pub fn as_slice(&self) -> &[Sample] {
        &self.data
    }

    /// Consume the image and return its samples.
    pub fn into_vec(self) -> Vec<Sample> {
        self.data
    }

    /// The sample at `(row, col)`, if inside the image.
    pub fn get(&self, row: usize, col: usize) -> Option<&Sample> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col)
    }

    /// Replace the sample at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the image.
    pub fn set(&mut self, row: usize, col: usize, sample: Sample) -> Result<(), ImageError> {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                row,
                col,
                self.width(),
                self.height(),
            ));
        }
        let idx = row * self.width() + col;
        self.data[idx] = sample;
        Ok(())
    }

    /// The samples of row `row`.
    ///
    /// PRECONDITION: `row < self.height()`.
    pub fn row(&self, row: usize) -> &[Sample] {
        let start = row * self.width();
        &self.data[start..start + self.width()]
    }

    /// Iterate over the rows of the image, top to bottom.
    pub fn iter_rows(&self) -> impl DoubleEndedIterator<Item = &[Sample]> + '_ {
        (0..self.height()).map(move |r| self.row(r))
    }

    /// The channel value at a possibly out-of-bounds position.
    ///
    /// Positions outside `[0, height) x [0, width)` read as 0 (zero padding).
    pub fn channel_or_zero(&self, row: isize, col: isize, channel: Channel) -> u8 {
        if row < 0 || col < 0 {
            return 0;
        }
        self.get(row as usize, col as usize)
            .map_or(0, |s| s.channel(channel))
    }

    /// Build a new image by applying `f` to every sample.
    pub fn map(&self, f: impl Fn(&Sample) -> Sample) -> Self {
        Self {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channel, ErrorKind, Image, ImageError, ImageSize, Sample};

    fn ramp() -> Image {
        Image::from_fn([3, 2].into(), |r, c| Sample::gray((r * 3 + c) as u8))
    }

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert_eq!(ImageSize::from([4, 5]), ImageSize { width: 4, height: 5 });
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::new([2, 1].into(), vec![Sample::BLACK, Sample::WHITE])?;
        assert_eq!(image.size().width, 2);
        assert_eq!(image.size().height, 1);
        assert_eq!(image.get(0, 1), Some(&Sample::WHITE));
        assert_eq!(image.get(1, 0), None);
        Ok(())
    }

    #[test]
    fn image_new_wrong_length() {
        let res = Image::new([2, 2].into(), vec![Sample::BLACK; 3]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(3, 4)));
    }

    #[test]
    fn image_size_overflow() {
        let huge = ImageSize {
            width: usize::MAX / 2,
            height: 3,
        };
        assert_eq!(huge.checked_area(), None);
        assert_eq!(huge.area(), usize::MAX);
        assert_eq!(
            Image::new(huge, vec![]),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 3))
        );
        assert_eq!(
            Image::from_rgb_bytes(huge, &[]),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 3))
        );
        // the pixel count fits but the byte count does not
        let wide = ImageSize {
            width: usize::MAX / 2,
            height: 1,
        };
        assert_eq!(
            Image::from_rgb_bytes(wide, &[]),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 1))
        );
        assert_eq!(ImageError::ImageSizeOverflow(1, 1).kind(), ErrorKind::Dimension);
    }

    #[test]
    fn image_rows() {
        let image = ramp();
        assert_eq!(image.rows(), 2);
        assert_eq!(image.cols(), 3);
        let rows = image.iter_rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Sample::gray(3), Sample::gray(4), Sample::gray(5)]);
    }

    #[test]
    fn image_set() -> Result<(), ImageError> {
        let mut image = ramp();
        image.set(1, 2, Sample::WHITE)?;
        assert_eq!(image.get(1, 2), Some(&Sample::WHITE));
        assert_eq!(
            image.set(2, 0, Sample::WHITE),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn image_channel_or_zero() {
        let image = Image::from_size_val([2, 2].into(), Sample::from_rgb(10, 20, 30));
        assert_eq!(image.channel_or_zero(0, 0, Channel::Red), 10);
        assert_eq!(image.channel_or_zero(1, 1, Channel::Blue), 30);
        assert_eq!(image.channel_or_zero(-1, 0, Channel::Red), 0);
        assert_eq!(image.channel_or_zero(0, 2, Channel::Green), 0);
        assert_eq!(image.channel_or_zero(2, 0, Channel::Intensity), 0);
    }

    #[test]
    fn image_rgb_bytes() -> Result<(), ImageError> {
        let bytes = vec![1u8, 2, 3, 4, 5, 6];
        let image = Image::from_rgb_bytes([2, 1].into(), &bytes)?;
        assert_eq!(image.get(0, 1), Some(&Sample::from_rgb(4, 5, 6)));
        assert_eq!(image.to_rgb_bytes(), bytes);
        assert!(Image::from_rgb_bytes([2, 1].into(), &bytes[..5]).is_err());
        Ok(())
    }

    #[test]
    fn image_map() {
        let image = ramp().map(|s| s.brighten(255).unwrap_or(*s));
        assert!(image.as_slice().iter().all(|s| *s == Sample::WHITE));
    }

    #[test]
    fn image_empty() -> Result<(), ImageError> {
        let image = Image::new([0, 3].into(), vec![])?;
        assert_eq!(image.iter_rows().count(), 3);
        assert!(image.row(1).is_empty());
        assert_eq!(image.channel_or_zero(0, 0, Channel::Red), 0);
        Ok(())
    }
}
