use std::{fs, path::Path, str::FromStr};

use pixelkit_image::{Image, ImageError, ImageSize, Sample};

use crate::error::IoError;

/// The magic number of plain-text PPM files.
pub const PPM_MAGIC: &str = "P3";

// whitespace separated tokens, skipping lines that start with '#'
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split_whitespace())
}

fn next_value<'a, T: FromStr>(
    it: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, IoError> {
    let token = it.next().ok_or(IoError::UnexpectedEof(field))?;
    token
        .parse()
        .map_err(|_| IoError::InvalidToken(field, token.to_string()))
}

/// Decode a plain-text PPM image.
///
/// The header is the `P3` magic number followed by the width, the height and
/// the maximum sample value. Then come `width * height` RGB triples in
/// row-major order. Lines starting with `#` are comments.
///
/// A maximum value other than 255 is accepted but the samples are not
/// rescaled.
///
/// # Arguments
///
/// * `text` - The contents of the PPM file.
///
/// # Returns
///
/// The decoded image.
///
/// # Errors
///
/// Returns an error for a malformed header, a size whose pixel count
/// overflows, a missing or non-numeric token, or a sample outside `0..=255`.
pub fn decode_ppm(text: &str) -> Result<Image, IoError> {
    let mut it = tokens(text);

    let magic = it.next().ok_or(IoError::UnexpectedEof("magic number"))?;
    if magic != PPM_MAGIC {
        return Err(IoError::InvalidPpmHeader(magic.to_string()));
    }

    let width: usize = next_value(&mut it, "width")?;
    let height: usize = next_value(&mut it, "height")?;
    let max_value: i64 = next_value(&mut it, "max value")?;
    if !(1..=255).contains(&max_value) {
        return Err(IoError::UnsupportedMaxValue(max_value));
    }
    if max_value != 255 {
        log::warn!("PPM max value is {max_value}, samples are read without rescaling");
    }

    let size = ImageSize { width, height };
    let area = size
        .checked_area()
        .ok_or(ImageError::ImageSizeOverflow(width, height))?;

    // every sample needs at least five bytes of text, so the header alone never sizes the buffer
    let mut data = Vec::with_capacity(area.min(text.len() / 5));
    for _ in 0..area {
        let r = next_value(&mut it, "red sample")?;
        let g = next_value(&mut it, "green sample")?;
        let b = next_value(&mut it, "blue sample")?;
        data.push(Sample::new(r, g, b)?);
    }

    log::debug!("decoded {size} PPM image");

    Ok(Image::new(size, data)?)
}

/// Encode an image as plain-text PPM.
///
/// Writes the header `P3`, `width height` and `255` on their own lines,
/// followed by one channel value per line.
pub fn encode_ppm(image: &Image) -> String {
    let mut out = format!("{PPM_MAGIC}\n{} {}\n255\n", image.width(), image.height());
    for px in image.as_slice() {
        for c in px.to_array() {
            out.push_str(&c.to_string());
            out.push('\n');
        }
    }
    out
}

/// Read a plain-text PPM image from a file.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM file.
///
/// # Returns
///
/// An RGB image.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let text = fs::read_to_string(file_path)?;
    decode_ppm(&text)
}

/// Writes the given image to the given file path as plain-text PPM.
///
/// # Arguments
///
/// - `file_path` - The path to the PPM image.
/// - `image` - The image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    fs::write(file_path, encode_ppm(image))?;
    Ok(())
}
