use pixelkit_image::ImageError;

/// A square matrix of filter weights with an odd side length.
///
/// # Examples
///
/// ```
/// use pixelkit_imgproc::filter::Kernel;
///
/// let kernel = Kernel::blur();
/// assert_eq!(kernel.size(), 3);
/// assert_eq!(kernel.half_extent(), 1);
/// assert_eq!(kernel.weight(1, 1), 0.25);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Arguments
    ///
    /// * `size` - The side length of the kernel, must be odd.
    /// * `weights` - The `size * size` weights in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or zero, or if `weights` has the wrong length.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self, ImageError> {
        if size % 2 == 0 || weights.len() != size * size {
            return Err(ImageError::InvalidKernelSize(size, weights.len()));
        }
        Ok(Self { size, weights })
    }

    /// The normalized 3x3 blur kernel.
    ///
    /// ```text
    /// 1/16 1/8 1/16
    /// 1/8  1/4 1/8
    /// 1/16 1/8 1/16
    /// ```
    pub fn blur() -> Self {
        let weights = (0..9)
            .map(|i| match (i / 3, i % 3) {
                (1, 1) => 0.25,
                (r, c) if r % 2 == 0 && c % 2 == 0 => 0.0625,
                _ => 0.125,
            })
            .collect();
        Self { size: 3, weights }
    }

    /// The 5x5 sharpen kernel.
    ///
    /// ```text
    /// -1/8 -1/8 -1/8 -1/8 -1/8
    /// -1/8  1/4  1/4  1/4 -1/8
    /// -1/8  1/4  1    1/4 -1/8
    /// -1/8  1/4  1/4  1/4 -1/8
    /// -1/8 -1/8 -1/8 -1/8 -1/8
    /// ```
    ///
    /// The positive core outweighs the negative ring on any partial
    /// neighborhood, so bright pixels near edges saturate.
    pub fn sharpen() -> Self {
        let weights = (0..25)
            .map(|i| match (i / 5, i % 5) {
                (2, 2) => 1.0,
                (1..=3, 1..=3) => 0.25,
                _ => -0.125,
            })
            .collect();
        Self { size: 5, weights }
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset from the kernel center to its border, `size / 2`.
    pub fn half_extent(&self) -> usize {
        self.size / 2
    }

    /// The weight at `(row, col)`.
    ///
    /// PRECONDITION: `row < size` and `col < size`.
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.size + col]
    }

    /// The weights in row-major order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
