use log::debug;

use crate::error::ChromaveilError;
use crate::matrix::{DeficiencyKind, TransformMatrix};
use crate::pixel::{first_mismatch, map_pixels, Pixel, PixelKind};
use crate::result::Result;

/// Simulates the color vision deficiency `kind` on a sequence of RGB pixels.
///
/// Each pixel is transformed on its own with the catalog matrix of `kind`, the
/// output has the same length and order as the input. Every pixel must be
/// [`Pixel::Rgb`], otherwise nothing is produced and
/// [`ChromaveilError::PixelVariantMismatch`] names the first offending index.
///
/// ## Example
/// ```rust
/// use chromaveil_core::{filter, DeficiencyKind, Pixel};
///
/// let pixels = vec![Pixel::Rgb(10, 20, 30)];
/// assert_eq!(filter(&pixels, DeficiencyKind::None).unwrap(), pixels);
/// ```
pub fn filter(pixels: &[Pixel], kind: DeficiencyKind) -> Result<Vec<Pixel>> {
    debug!("simulating {kind} deficiency on {} pixels", pixels.len());
    filter_with_matrix(pixels, &TransformMatrix::for_deficiency(kind))
}

/// Like [`filter`] but with an arbitrary matrix.
pub fn filter_with_matrix(pixels: &[Pixel], matrix: &TransformMatrix) -> Result<Vec<Pixel>> {
    if let Some(index) = first_mismatch(pixels, PixelKind::Rgb) {
        return Err(ChromaveilError::PixelVariantMismatch {
            index,
            expected: PixelKind::Rgb,
        });
    }

    Ok(map_pixels(pixels, |p| transform_pixel(matrix, p)))
}

#[inline]
fn transform_pixel(matrix: &TransformMatrix, pixel: Pixel) -> Pixel {
    match pixel {
        Pixel::Rgb(r, g, b) => {
            let [r, g, b] = matrix.apply([r, g, b]).map(saturate);
            Pixel::Rgb(r, g, b)
        }
        // validated before mapping
        gray @ Pixel::Gray(_) => gray,
    }
}

/// Pins an unclamped channel value into `0..=255`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturate(channel: i32) -> u8 {
    channel.clamp(0, i32::from(u8::MAX)) as u8
}
