use crate::error::ImageError;

/// Fixed-point weights of the luma projection (R, G, B), in units of 1/[`LUMA_SCALE`].
///
/// 0.2126, 0.7152, 0.0722
///
/// Some legacy luma paths weight red with 0.2162 instead of 0.2126; every
/// projection here uses this single set.
pub const LUMA_WEIGHTS: [u32; 3] = [2126, 7152, 722];

/// Denominator of [`LUMA_WEIGHTS`].
pub const LUMA_SCALE: u32 = 10_000;

/// Fixed-point rows of the sepia tone matrix, in units of 1/[`SEPIA_SCALE`].
pub const SEPIA_WEIGHTS: [[u32; 3]; 3] = [
    [393, 769, 189],
    [349, 686, 168],
    [272, 534, 131],
];

/// Denominator of [`SEPIA_WEIGHTS`].
pub const SEPIA_SCALE: u32 = 1_000;

/// A single-valued view of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The truncated mean of the three channels.
    Intensity,
}

impl Channel {
    /// The three colour channels in storage order.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lower-case name of the channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Intensity => "intensity",
        }
    }
}

/// An immutable 8-bit RGB colour sample.
///
/// Every channel is guaranteed to lie in `0..=255` by construction. Two samples
/// are equal iff all three channels are equal.
///
/// # Examples
///
/// ```
/// use pixelkit_image::Sample;
///
/// let s = Sample::new(10, 20, 30).unwrap();
/// assert_eq!(s.value(), 30);
/// assert_eq!(s.intensity(), 20);
/// assert!(Sample::new(256, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    r: u8,
    g: u8,
    b: u8,
}

fn channel_from_i32(name: &'static str, value: i32) -> Result<u8, ImageError> {
    u8::try_from(value).map_err(|_| ImageError::InvalidChannelValue(name, value))
}

// weighted sums of non-negative inputs never go below zero, only the top is clipped
fn weighted_sum(weights: &[u32; 3], scale: u32, r: u8, g: u8, b: u8) -> u8 {
    let v = weights[0] * u32::from(r) + weights[1] * u32::from(g) + weights[2] * u32::from(b);
    (v / scale).min(255) as u8
}

impl Sample {
    /// Pure black, the mask selector.
    pub const BLACK: Sample = Sample::from_rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Sample = Sample::from_rgb(255, 255, 255);

    /// Create a sample from integer channels, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidChannelValue`] naming the first channel
    /// outside `0..=255`.
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self, ImageError> {
        Ok(Self {
            r: channel_from_i32("red", r)?,
            g: channel_from_i32("green", g)?,
            b: channel_from_i32("blue", b)?,
        })
    }

    /// Create a sample from channels already known to be in range.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a neutral sample with all three channels equal to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.r
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// The value of the given channel, computing the intensity when asked for it.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Intensity => self.intensity(),
        }
    }

    /// The channels as an `[r, g, b]` array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Truncated mean of the three channels.
    pub fn intensity(&self) -> u8 {
        ((u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3) as u8
    }

    /// Truncated weighted luma, see [`LUMA_WEIGHTS`].
    pub fn luma(&self) -> u8 {
        weighted_sum(&LUMA_WEIGHTS, LUMA_SCALE, self.r, self.g, self.b)
    }

    /// Largest of the three channels.
    pub fn value(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Neutral sample carrying only the red channel.
    pub fn red_only(&self) -> Self {
        Self::gray(self.r)
    }

    /// Neutral sample carrying only the green channel.
    pub fn green_only(&self) -> Self {
        Self::gray(self.g)
    }

    /// Neutral sample carrying only the blue channel.
    pub fn blue_only(&self) -> Self {
        Self::gray(self.b)
    }

    /// Add `delta` to every channel, saturating each channel on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidBrightness`] if `delta` is outside `-255..=255`.
    pub fn brighten(&self, delta: i32) -> Result<Self, ImageError> {
        check_brightness(delta)?;
        Ok(self.saturating_add(delta))
    }

    /// Add `delta` to every channel, clamping each channel to `[0, 255]`.
    pub fn saturating_add(&self, delta: i32) -> Self {
        let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
        Self::from_rgb(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Apply the sepia tone matrix, see [`SEPIA_WEIGHTS`].
    pub fn to_sepia(&self) -> Self {
        let [r, g, b] =
            SEPIA_WEIGHTS.map(|row| weighted_sum(&row, SEPIA_SCALE, self.r, self.g, self.b));
        Self::from_rgb(r, g, b)
    }

    /// Neutral sample of the luma value.
    pub fn to_grayscale(&self) -> Self {
        Self::gray(self.luma())
    }
}

/// Validate a brightness delta without touching any sample.
///
/// # Errors
///
/// Returns [`ImageError::InvalidBrightness`] if `delta` is outside `-255..=255`.
pub fn check_brightness(delta: i32) -> Result<(), ImageError> {
    if !(-255..=255).contains(&delta) {
        return Err(ImageError::InvalidBrightness(delta));
    }
    Ok(())
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Sample {
    fn from(rgb: [u8; 3]) -> Self {
        Sample::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_channels() {
        assert!(Sample::new(0, 128, 255).is_ok());
        assert_eq!(
            Sample::new(-1, 0, 0),
            Err(ImageError::InvalidChannelValue("red", -1))
        );
        assert_eq!(
            Sample::new(0, 256, 0),
            Err(ImageError::InvalidChannelValue("green", 256))
        );
        assert_eq!(
            Sample::new(0, 0, 1000),
            Err(ImageError::InvalidChannelValue("blue", 1000))
        );
    }

    #[test]
    fn test_projections() -> Result<(), ImageError> {
        let s = Sample::new(10, 20, 31)?;
        assert_eq!(s.intensity(), 20);
        assert_eq!(s.value(), 31);
        // 0.2126 * 10 + 0.7152 * 20 + 0.0722 * 31 = 18.66
        assert_eq!(s.luma(), 18);
        assert_eq!(s.red_only(), Sample::gray(10));
        assert_eq!(s.green_only(), Sample::gray(20));
        assert_eq!(s.blue_only(), Sample::gray(31));
        assert_eq!(s.channel(Channel::Intensity), 20);
        Ok(())
    }

    #[test]
    fn test_intensity_truncates() {
        assert_eq!(Sample::from_rgb(1, 1, 2).intensity(), 1);
        assert_eq!(Sample::WHITE.intensity(), 255);
    }

    #[test]
    fn test_grayscale_pure_red() {
        assert_eq!(Sample::from_rgb(255, 0, 0).to_grayscale(), Sample::gray(54));
        assert_eq!(Sample::WHITE.to_grayscale(), Sample::WHITE);
    }

    #[test]
    fn test_sepia_saturates_top() {
        assert_eq!(Sample::WHITE.to_sepia(), Sample::from_rgb(255, 255, 238));
        assert_eq!(Sample::BLACK.to_sepia(), Sample::BLACK);
        // 0.393 * 100 + 0.769 * 50 + 0.189 * 20 = 81.53
        assert_eq!(Sample::from_rgb(100, 50, 20).to_sepia().red(), 81);
    }

    #[test]
    fn test_brighten() -> Result<(), ImageError> {
        let s = Sample::new(250, 100, 3)?;
        assert_eq!(s.brighten(10)?, Sample::from_rgb(255, 110, 13));
        assert_eq!(s.brighten(-10)?, Sample::from_rgb(240, 90, 0));
        assert_eq!(s.brighten(0)?, s);
        assert_eq!(s.brighten(256), Err(ImageError::InvalidBrightness(256)));
        assert_eq!(s.brighten(-256), Err(ImageError::InvalidBrightness(-256)));
        Ok(())
    }

    #[test]
    fn test_brighten_round_trip_saturates() -> Result<(), ImageError> {
        for s in [
            Sample::from_rgb(0, 127, 255),
            Sample::from_rgb(30, 40, 50),
            Sample::WHITE,
        ] {
            for d in [-255, -60, 0, 1, 100, 255] {
                let back = s.brighten(d)?.brighten(-d)?;
                let expected = s.to_array().map(|c| {
                    let clipped = (i32::from(c) + d).clamp(0, 255);
                    (clipped - d).clamp(0, 255) as u8
                });
                assert_eq!(back, Sample::from(expected));
            }
        }
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Sample::from_rgb(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let s = Sample::from_rgb(1, 2, 3);
        let json = serde_json::to_string(&s)?;
        assert_eq!(serde_json::from_str::<Sample>(&json)?, s);
        Ok(())
    }
}
