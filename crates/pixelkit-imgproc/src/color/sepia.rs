use pixelkit_image::{Image, Sample};

/// Apply a sepia tone to an RGB image.
///
/// Each output channel is a fixed weighted sum of the input channels,
/// truncated and capped at 255:
///
/// ```text
/// R' = 0.393 R + 0.769 G + 0.189 B
/// G' = 0.349 R + 0.686 G + 0.168 B
/// B' = 0.272 R + 0.534 G + 0.131 B
/// ```
pub fn sepia_from_rgb(src: &Image) -> Image {
    src.map(Sample::to_sepia)
}
