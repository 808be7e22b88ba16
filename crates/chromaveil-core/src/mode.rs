use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use image::ColorType;

/// The color mode of an image, decides how a hidden image is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageMode {
    /// 8 bit grayscale
    Luma,
    /// 8 bit per channel RGB
    Rgb,
    /// any other mode, carries its name for diagnostics
    Other(String),
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageMode::Luma => f.write_str("L"),
            ImageMode::Rgb => f.write_str("RGB"),
            ImageMode::Other(name) => f.write_str(name),
        }
    }
}

/// Never fails, unknown names end up as [`ImageMode::Other`].
impl FromStr for ImageMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1" | "L" | "gray" | "grayscale" => ImageMode::Luma,
            "RGB" | "rgb" => ImageMode::Rgb,
            other => ImageMode::Other(other.to_owned()),
        })
    }
}

impl From<ColorType> for ImageMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => ImageMode::Luma,
            ColorType::Rgb8 => ImageMode::Rgb,
            other => ImageMode::Other(format!("{other:?}")),
        }
    }
}
