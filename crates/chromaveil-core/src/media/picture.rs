use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use log::{debug, error};

use crate::error::ChromaveilError;
use crate::mode::ImageMode;
use crate::pixel::{first_mismatch, Pixel, PixelKind};
use crate::result::Result;

use super::Persist;

/// A decoded image as a flat, row-major pixel sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: u32,
    height: u32,
    mode: ImageMode,
    pixels: Vec<Pixel>,
}

impl Picture {
    /// Builds a picture from pixels in row-major order.
    ///
    /// The number of pixels has to match `width * height`.
    pub fn new(width: u32, height: u32, mode: ImageMode, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() as u64 != u64::from(width) * u64::from(height) {
            return Err(ChromaveilError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            mode,
            pixels,
        })
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let bytes = fs::read(f).map_err(|e| {
            error!("Error reading image {f:?}: {e}");
            ChromaveilError::ReadError { source: e }
        })?;
        let format = image::guess_format(&bytes)
            .or_else(|_| ImageFormat::from_path(f))
            .map_err(|e| {
                error!("Unknown image format of {f:?}: {e}");
                ChromaveilError::InvalidImageMedia
            })?;
        let img = image::load_from_memory_with_format(&bytes, format).map_err(|e| {
            error!("Error decoding image {f:?}: {e}");
            ChromaveilError::InvalidImageMedia
        })?;

        let picture = Self::from_image(img);
        if format == ImageFormat::Bmp && is_indexed_bmp(&bytes) {
            // palettes are expanded to RGB while decoding
            return Ok(picture.into_gray_if_neutral());
        }
        Ok(picture)
    }

    /// 8 bit gray and RGB images keep their mode, everything else is read as RGB
    /// with alpha dropped and keeps the name of its original color type as mode.
    pub fn from_image(img: DynamicImage) -> Self {
        let mode = ImageMode::from(img.color());
        let (width, height) = (img.width(), img.height());
        debug!("decoded {width}x{height} image in mode {mode}");

        let pixels = match img {
            DynamicImage::ImageLuma8(gray) => gray.pixels().map(Pixel::from).collect(),
            DynamicImage::ImageRgb8(rgb) => rgb.pixels().map(Pixel::from).collect(),
            other => other.to_rgb8().pixels().map(Pixel::from).collect(),
        };

        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn mode(&self) -> &ImageMode {
        &self.mode
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// A new picture with the same dimensions and mode but other pixels.
    pub fn with_pixels(&self, pixels: Vec<Pixel>) -> Result<Self> {
        Self::new(self.width, self.height, self.mode.clone(), pixels)
    }

    /// Reinterprets the picture in `mode`.
    ///
    /// RGB pixels become gray only when all three channels are equal, gray pixels
    /// become RGB by repeating the value. Any other mode is taken as is.
    pub fn into_mode(self, mode: ImageMode) -> Result<Self> {
        let pixels = match mode {
            ImageMode::Luma => {
                let mut gray = Vec::with_capacity(self.pixels.len());
                for (index, p) in self.pixels.into_iter().enumerate() {
                    match p {
                        Pixel::Gray(v) => gray.push(Pixel::Gray(v)),
                        Pixel::Rgb(r, g, b) if r == g && g == b => gray.push(Pixel::Gray(r)),
                        Pixel::Rgb(..) => {
                            return Err(ChromaveilError::PixelVariantMismatch {
                                index,
                                expected: PixelKind::Gray,
                            })
                        }
                    }
                }
                gray
            }
            ImageMode::Rgb => self
                .pixels
                .into_iter()
                .map(|p| match p {
                    Pixel::Gray(v) => Pixel::Rgb(v, v, v),
                    rgb @ Pixel::Rgb(..) => rgb,
                })
                .collect(),
            ImageMode::Other(_) => self.pixels,
        };
        debug!("reinterpreted {}x{} image as mode {mode}", self.width, self.height);

        Ok(Self {
            width: self.width,
            height: self.height,
            mode,
            pixels,
        })
    }

    /// Turns an RGB picture whose pixels are all neutral gray into a grayscale one.
    fn into_gray_if_neutral(self) -> Self {
        if self.mode != ImageMode::Rgb {
            return self;
        }
        let neutral = self
            .pixels
            .iter()
            .all(|p| matches!(*p, Pixel::Rgb(r, g, b) if r == g && g == b));
        if !neutral {
            return self;
        }

        let width = self.width;
        let height = self.height;
        let pixels = self
            .pixels
            .into_iter()
            .map(|p| match p {
                Pixel::Rgb(v, ..) | Pixel::Gray(v) => Pixel::Gray(v),
            })
            .collect();
        Self {
            width,
            height,
            mode: ImageMode::Luma,
            pixels,
        }
    }

    /// Materializes the pixels as an 8 bit image, grayscale for gray pixels and RGB otherwise.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let (w, h) = self.dimensions();
        let kind = self.pixels.first().map_or(PixelKind::Rgb, Pixel::kind);
        if let Some(index) = first_mismatch(&self.pixels, kind) {
            return Err(ChromaveilError::PixelVariantMismatch {
                index,
                expected: kind,
            });
        }

        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            match *p {
                Pixel::Gray(v) => raw.push(v),
                Pixel::Rgb(r, g, b) => raw.extend_from_slice(&[r, g, b]),
            }
        }

        let img = match kind {
            PixelKind::Gray => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
            PixelKind::Rgb => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        };
        img.ok_or(ChromaveilError::ImageEncodingError)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.to_image()?
            .write_to(&mut writer, format)
            .map_err(|e| {
                error!("Error saving image: {e}");
                ChromaveilError::ImageEncodingError
            })
    }
}

impl Persist for Picture {
    /// Encodes in memory first, the file is only touched once encoding succeeded.
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = ImageFormat::from_path(file).unwrap_or(ImageFormat::Png);
        let mut encoded = Cursor::new(Vec::new());
        self.save_to_writer(&mut encoded, format)?;

        fs::write(file, encoded.into_inner()).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            ChromaveilError::WriteError { source: e }
        })
    }
}

/// Bits per pixel of a BMP info header, 8 or less means the pixels index a palette.
fn is_indexed_bmp(bytes: &[u8]) -> bool {
    const BITS_PER_PIXEL_OFFSET: usize = 28;

    bytes
        .get(BITS_PER_PIXEL_OFFSET..BITS_PER_PIXEL_OFFSET + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .is_some_and(|bpp| bpp <= 8)
}
