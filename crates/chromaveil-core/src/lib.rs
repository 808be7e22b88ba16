//! # Chromaveil Core API
//!
//! Pixel level transforms on 8 bit grayscale and RGB images:
//! - [`filter`] simulates a color vision deficiency by multiplying every RGB
//!   pixel with a fixed 3x3 matrix from the [`TransformMatrix`] catalog
//! - [`reveal`] recovers an image hidden in the least significant bits of a
//!   carrier image, 1 bit for grayscale and 3 bits per channel for RGB
//!
//! Both work on plain pixel sequences, [`media::Picture`] decodes and encodes
//! image files around them.
//!
//! # Usage Examples
//!
//! ## Simulate a red deficiency on an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let input = temp_dir.path().join("lenna.png");
//! RgbImage::from_pixel(4, 4, Rgb([200, 100, 50])).save(&input).unwrap();
//!
//! let output = chromaveil_core::api::filter::prepare()
//!     .with_image(&input)
//!     .with_deficiency(chromaveil_core::DeficiencyKind::Red)
//!     .execute()
//!     .expect("Failed to filter image");
//!
//! assert_eq!(output, temp_dir.path().join("lenna_red.png"));
//! ```
//!
//! ## Reveal a hidden image
//!
//! ```rust
//! use image::{Luma, GrayImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let input = temp_dir.path().join("hidden.png");
//! GrayImage::from_pixel(4, 4, Luma([215])).save(&input).unwrap();
//!
//! chromaveil_core::api::reveal::prepare()
//!     .from_secret_file(&input)
//!     .into_output(temp_dir.path().join("revealed.png"))
//!     .execute()
//!     .expect("Failed to reveal hidden image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
mod bit_plane;
mod color_filter;
pub mod commands;
pub mod error;
mod hidden_image;
mod matrix;
pub mod media;
mod mode;
mod options;
mod pixel;
pub mod result;

pub use crate::bit_plane::{extract, extract_end_bits, BitDepth};
pub use crate::color_filter::{filter, filter_with_matrix};
pub use crate::error::ChromaveilError;
pub use crate::hidden_image::{reveal, reveal_gray, reveal_rgb, reveal_with_options};
pub use crate::matrix::{matrix_for, DeficiencyKind, TransformMatrix};
pub use crate::mode::ImageMode;
pub use crate::options::{FilterOptions, RevealOptions};
pub use crate::pixel::{Pixel, PixelKind, PARALLEL_THRESHOLD};
pub use crate::result::Result;
