use crate::bit_plane::BitDepth;
use crate::matrix::DeficiencyKind;
use crate::mode::ImageMode;

/// Options for revealing an image hidden in the low order bits of a carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOptions {
    /// Number of low order bits that carry the hidden image in a grayscale carrier.
    /// The extracted value is spread over `0..=255`, for one bit that is black or white.
    pub luma_bits: BitDepth,

    /// Number of low order bits per color channel that carry the hidden image in an RGB carrier.
    pub rgb_bits: BitDepth,

    /// Reads the carrier file in this mode instead of the one it was decoded with,
    /// used by [`crate::api::reveal`]
    pub mode: Option<ImageMode>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            luma_bits: BitDepth::ONE,
            rgb_bits: BitDepth::THREE,
            mode: None,
        }
    }
}

impl RevealOptions {
    pub fn with_luma_bits(mut self, bits: BitDepth) -> Self {
        self.luma_bits = bits;
        self
    }

    pub fn with_rgb_bits(mut self, bits: BitDepth) -> Self {
        self.rgb_bits = bits;
        self
    }

    pub fn with_mode(mut self, mode: ImageMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Options for simulating a color vision deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// The deficiency to simulate, `none` leaves the image untouched
    pub deficiency: DeficiencyKind,
}

impl FilterOptions {
    pub fn with_deficiency(mut self, deficiency: DeficiencyKind) -> Self {
        self.deficiency = deficiency;
        self
    }
}
