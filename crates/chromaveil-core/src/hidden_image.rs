use log::debug;

use crate::bit_plane::{extract, BitDepth};
use crate::error::ChromaveilError;
use crate::mode::ImageMode;
use crate::options::RevealOptions;
use crate::pixel::{first_mismatch, map_pixels, Pixel, PixelKind};
use crate::result::Result;

/// Reveals the image hidden in the low order bits of `pixels`.
///
/// - [`ImageMode::Luma`]: the last bit of each pixel, 0 becomes black and 1 white
/// - [`ImageMode::Rgb`]: the last 3 bits of each channel, spread as `value * 255 / 7`
///
/// Any other mode fails with [`ChromaveilError::UnsupportedMode`].
///
/// ## Example
/// ```rust
/// use chromaveil_core::{reveal, ImageMode, Pixel};
///
/// let carrier = vec![Pixel::Gray(214), Pixel::Gray(215)];
/// assert_eq!(
///     reveal(&carrier, &ImageMode::Luma).unwrap(),
///     vec![Pixel::Gray(0), Pixel::Gray(255)]
/// );
/// ```
pub fn reveal(pixels: &[Pixel], mode: &ImageMode) -> Result<Vec<Pixel>> {
    reveal_with_options(pixels, mode, &RevealOptions::default())
}

/// Like [`reveal`] with configurable bit counts per mode.
pub fn reveal_with_options(
    pixels: &[Pixel],
    mode: &ImageMode,
    options: &RevealOptions,
) -> Result<Vec<Pixel>> {
    match mode {
        ImageMode::Luma => reveal_bits(pixels, PixelKind::Gray, options.luma_bits),
        ImageMode::Rgb => reveal_bits(pixels, PixelKind::Rgb, options.rgb_bits),
        ImageMode::Other(name) => Err(ChromaveilError::UnsupportedMode(name.clone())),
    }
}

/// Reveals a black and white image from the last bit of grayscale pixels.
pub fn reveal_gray(pixels: &[Pixel]) -> Result<Vec<Pixel>> {
    reveal_bits(pixels, PixelKind::Gray, BitDepth::ONE)
}

/// Reveals a color image from the last 3 bits of each channel of RGB pixels.
pub fn reveal_rgb(pixels: &[Pixel]) -> Result<Vec<Pixel>> {
    reveal_bits(pixels, PixelKind::Rgb, BitDepth::THREE)
}

fn reveal_bits(pixels: &[Pixel], kind: PixelKind, bits: BitDepth) -> Result<Vec<Pixel>> {
    if let Some(index) = first_mismatch(pixels, kind) {
        return Err(ChromaveilError::PixelVariantMismatch {
            index,
            expected: kind,
        });
    }
    debug!("revealing {bits} bit(s) of {} {kind} pixels", pixels.len());

    Ok(map_pixels(pixels, |p| {
        extract(bits, p).map_channels(|c| bits.rescale(c))
    }))
}
