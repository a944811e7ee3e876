use pixelkit_image::{Channel, Image};

/// Number of buckets of a histogram, one per 8-bit value.
pub const NUM_BINS: usize = 256;

/// A dense frequency table indexed by channel value.
pub type Histogram = [usize; NUM_BINS];

/// Options for histogram normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramOptions {
    /// Upper bound of the normalized values.
    pub display_bound: usize,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self { display_bound: 100 }
    }
}

/// Compute the value histogram of one channel of an image.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `channel` - The channel to count. [`Channel::Intensity`] counts the
///   truncated channel mean of every pixel.
///
/// # Returns
///
/// A table of 256 buckets summing to `width * height`.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Channel, Image, Sample};
/// use pixelkit_imgproc::histogram::compute_histogram;
///
/// let image = Image::from_size_val([3, 3].into(), Sample::from_rgb(0, 128, 255));
///
/// let histogram = compute_histogram(&image, Channel::Green);
/// assert_eq!(histogram[128], 9);
/// assert_eq!(histogram.iter().sum::<usize>(), 9);
/// ```
pub fn compute_histogram(src: &Image, channel: Channel) -> Histogram {
    let mut hist = [0usize; NUM_BINS];
    for px in src.as_slice() {
        hist[usize::from(px.channel(channel))] += 1;
    }
    hist
}

/// The red, green, blue and intensity histograms of an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histograms {
    /// Frequencies of the red channel.
    pub red: Histogram,
    /// Frequencies of the green channel.
    pub green: Histogram,
    /// Frequencies of the blue channel.
    pub blue: Histogram,
    /// Frequencies of the per-pixel intensity.
    pub intensity: Histogram,
}

impl Histograms {
    /// Count all four tables in a single pass over the image.
    pub fn from_image(src: &Image) -> Self {
        let mut out = Self {
            red: [0; NUM_BINS],
            green: [0; NUM_BINS],
            blue: [0; NUM_BINS],
            intensity: [0; NUM_BINS],
        };
        for px in src.as_slice() {
            out.red[usize::from(px.red())] += 1;
            out.green[usize::from(px.green())] += 1;
            out.blue[usize::from(px.blue())] += 1;
            out.intensity[usize::from(px.intensity())] += 1;
        }
        out
    }

    /// The table for `channel`.
    pub fn get(&self, channel: Channel) -> &Histogram {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Intensity => &self.intensity,
        }
    }

    /// The four tables in red, green, blue, intensity order.
    pub fn tables(&self) -> [&Histogram; 4] {
        [&self.red, &self.green, &self.blue, &self.intensity]
    }

    /// Smallest frequency across all four tables.
    pub fn global_min(&self) -> usize {
        self.tables()
            .iter()
            .flat_map(|t| t.iter())
            .copied()
            .min()
            .unwrap_or(0)
    }

    /// Largest frequency across all four tables.
    pub fn global_max(&self) -> usize {
        self.tables()
            .iter()
            .flat_map(|t| t.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Rescale every bucket to `[0, display_bound]` on one shared axis.
    ///
    /// All four tables use the same global minimum and maximum, so relative
    /// channel magnitudes stay comparable:
    ///
    /// v' = (v - min) / (max - min) * display_bound
    ///
    /// truncated to an integer. If every bucket holds the same frequency the
    /// result is all zeros.
    pub fn normalize(&self, options: &HistogramOptions) -> Histograms {
        let (min, max) = (self.global_min(), self.global_max());
        let range = max - min;
        let rescale = |table: &Histogram| {
            table.map(|v| {
                if range == 0 {
                    return 0;
                }
                ((v - min) as f64 / range as f64 * options.display_bound as f64) as usize
            })
        };
        Histograms {
            red: rescale(&self.red),
            green: rescale(&self.green),
            blue: rescale(&self.blue),
            intensity: rescale(&self.intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelkit_image::{ImageError, ImageSize, Sample};

    fn sample_image() -> Result<Image, ImageError> {
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![
                Sample::new(0, 0, 0)?,
                Sample::new(255, 0, 0)?,
                Sample::new(255, 0, 0)?,
                Sample::new(10, 20, 30)?,
                Sample::new(10, 20, 30)?,
                Sample::new(10, 20, 30)?,
            ],
        )
    }

    #[test]
    fn test_compute_histogram() -> Result<(), ImageError> {
        let image = sample_image()?;
        let red = compute_histogram(&image, Channel::Red);
        assert_eq!(red[0], 1);
        assert_eq!(red[255], 2);
        assert_eq!(red[10], 3);

        let intensity = compute_histogram(&image, Channel::Intensity);
        assert_eq!(intensity[0], 1);
        assert_eq!(intensity[85], 2);
        assert_eq!(intensity[20], 3);
        Ok(())
    }

    #[test]
    fn test_histograms_sum_to_area() -> Result<(), ImageError> {
        let image = sample_image()?;
        let hist = Histograms::from_image(&image);
        for (table, channel) in hist.tables().iter().zip([
            Channel::Red,
            Channel::Green,
            Channel::Blue,
            Channel::Intensity,
        ]) {
            assert_eq!(table.iter().sum::<usize>(), 6);
            assert_eq!(*table, &compute_histogram(&image, channel));
        }
        Ok(())
    }

    #[test]
    fn test_normalize_joint() -> Result<(), ImageError> {
        let image = sample_image()?;
        let hist = Histograms::from_image(&image);
        assert_eq!(hist.global_min(), 0);
        // green holds 3 at bucket 0 and 3 at bucket 20, blue 3 at 30, red 3 at 10
        assert_eq!(hist.global_max(), 3);

        let norm = hist.normalize(&HistogramOptions::default());
        assert_eq!(norm.red[10], 100);
        assert_eq!(norm.red[255], 66);
        assert_eq!(norm.red[0], 33);
        assert_eq!(norm.green[0], 100);
        assert_eq!(norm.blue[128], 0);
        for table in norm.tables() {
            assert!(table.iter().all(|v| *v <= 100));
        }
        Ok(())
    }

    #[test]
    fn test_normalize_is_not_per_table() {
        // red holds the global peak, green and blue are rescaled against it
        let image = Image::from_fn([4, 1].into(), |_, c| {
            Sample::from_rgb(255, (c * 60) as u8, (c * 60) as u8)
        });
        let options = HistogramOptions { display_bound: 8 };
        let norm = Histograms::from_image(&image).normalize(&options);
        assert_eq!(norm.red[255], 8);
        assert_eq!(norm.green[60], 2);
        assert_eq!(norm.blue[180], 2);
    }

    #[test]
    fn test_normalize_flat() -> Result<(), ImageError> {
        let image = Image::new([0, 0].into(), vec![])?;
        let norm = Histograms::from_image(&image).normalize(&HistogramOptions::default());
        assert!(norm.tables().iter().all(|t| t.iter().all(|v| *v == 0)));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_serde() -> Result<(), Box<dyn std::error::Error>> {
        let options = HistogramOptions { display_bound: 255 };
        let json = serde_json::to_string(&options)?;
        assert_eq!(json, r#"{"display_bound":255}"#);
        assert_eq!(serde_json::from_str::<HistogramOptions>(&json)?, options);
        Ok(())
    }
}
