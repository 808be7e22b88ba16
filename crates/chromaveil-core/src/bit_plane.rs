use std::fmt;

use crate::error::ChromaveilError;
use crate::pixel::Pixel;
use crate::result::Result;

/// Number of low order bits taken from an 8 bit channel, always in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    /// one bit per channel, used for grayscale carriers
    pub const ONE: BitDepth = BitDepth(1);
    /// three bits per channel, used for RGB carriers
    pub const THREE: BitDepth = BitDepth(3);

    pub fn new(bits: u8) -> Result<Self> {
        if (1..=8).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(ChromaveilError::InvalidBitDepth(bits))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `2^bits - 1`, selects the low order bits of a channel
    #[inline]
    pub fn mask(self) -> u8 {
        u8::MAX >> (8 - self.0)
    }

    /// Spreads a value of this depth over `0..=255` with floor division,
    /// `value * 255 / (2^bits - 1)`.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rescale(self, value: u8) -> u8 {
        let max = u16::from(self.mask());
        (u16::from(value & self.mask()) * 255 / max) as u8
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = ChromaveilError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keeps the `bits` least significant bits of every channel of `pixel`,
/// that is `channel mod 2^bits`. The variant of the pixel is preserved.
#[inline]
pub fn extract(bits: BitDepth, pixel: Pixel) -> Pixel {
    let mask = bits.mask();
    pixel.map_channels(|c| c & mask)
}

/// Like [`extract`] but validates a raw bit count first.
///
/// ## Example
/// ```rust
/// use chromaveil_core::{extract_end_bits, Pixel};
///
/// // 214 is 0b1101_0110, the last 5 bits are 0b10110
/// assert_eq!(extract_end_bits(5, Pixel::Gray(214)).unwrap(), Pixel::Gray(22));
/// assert_eq!(
///     extract_end_bits(3, Pixel::Rgb(214, 17, 8)).unwrap(),
///     Pixel::Rgb(6, 1, 0)
/// );
/// ```
pub fn extract_end_bits(num_bits: u8, pixel: Pixel) -> Result<Pixel> {
    Ok(extract(BitDepth::new(num_bits)?, pixel))
}
