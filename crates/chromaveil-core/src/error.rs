use thiserror::Error;

use crate::pixel::PixelKind;

#[derive(Error, Debug)]
pub enum ChromaveilError {
    /// Represents a color deficiency name that is not one of red, green, blue or none
    #[error("Invalid argument: unknown color deficiency `{0}`, expected one of red, green, blue or none")]
    UnknownDeficiency(String),

    /// Represents a bit count that cannot be taken from an 8 bit channel
    #[error("Invalid argument: cannot extract {0} bits from an 8 bit channel, expected 1 to 8")]
    InvalidBitDepth(u8),

    /// Represents a pixel sequence that holds a pixel of the wrong kind for the operation,
    /// for example a grayscale pixel handed to the color deficiency filter
    #[error("Invalid argument: pixel at index {index} is not a {expected} pixel")]
    PixelVariantMismatch { index: usize, expected: PixelKind },

    /// Represents a pixel sequence that does not cover the given image dimensions
    #[error("Invalid argument: {len} pixels do not fit an image of {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    /// Represents an image mode other than grayscale or RGB, carries the mode name
    #[error("Unsupported image mode: {0}")]
    UnsupportedMode(String),

    /// Represents an invalid input image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No input image set")]
    InputNotSet,
}
