use std::fmt;

use image::{Luma, Rgb};

/// Sequences at least this long are mapped on the rayon thread pool when the
/// `parallel` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Minimal number of contiguous pixels one rayon job works on.
const CHUNK_LEN: usize = 1 << 13;

/// one image sample, either a single intensity or the three RGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    Gray(u8),
    Rgb(u8, u8, u8),
}

/// the variant of a [`Pixel`] without its values, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    Gray,
    Rgb,
}

impl fmt::Display for PixelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelKind::Gray => f.write_str("grayscale"),
            PixelKind::Rgb => f.write_str("RGB"),
        }
    }
}

impl Pixel {
    pub fn kind(&self) -> PixelKind {
        match self {
            Pixel::Gray(_) => PixelKind::Gray,
            Pixel::Rgb(..) => PixelKind::Rgb,
        }
    }

    /// applies `f` to every channel, keeping the variant
    #[inline]
    pub fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        match self {
            Pixel::Gray(v) => Pixel::Gray(f(v)),
            Pixel::Rgb(r, g, b) => Pixel::Rgb(f(r), f(g), f(b)),
        }
    }
}

impl From<u8> for Pixel {
    fn from(value: u8) -> Self {
        Pixel::Gray(value)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Pixel::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel::Rgb(r, g, b)
    }
}

impl From<&Luma<u8>> for Pixel {
    fn from(p: &Luma<u8>) -> Self {
        Pixel::Gray(p.0[0])
    }
}

impl From<&Rgb<u8>> for Pixel {
    fn from(p: &Rgb<u8>) -> Self {
        Pixel::Rgb(p.0[0], p.0[1], p.0[2])
    }
}

/// Returns the index of the first pixel that is not of `kind`.
pub(crate) fn first_mismatch(pixels: &[Pixel], kind: PixelKind) -> Option<usize> {
    pixels.iter().position(|p| p.kind() != kind)
}

/// Maps every pixel through `f`, keeping length and order.
///
/// Long sequences are split into contiguous chunks and mapped in parallel,
/// the collected output is still in input order.
pub(crate) fn map_pixels<F>(pixels: &[Pixel], f: F) -> Vec<Pixel>
where
    F: Fn(Pixel) -> Pixel + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if pixels.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;

            return pixels
                .par_iter()
                .with_min_len(CHUNK_LEN)
                .map(|p| f(*p))
                .collect();
        }
    }

    pixels.iter().map(|p| f(*p)).collect()
}
