use std::path::PathBuf;

use clap::Args;
use chromaveil_core::{ImageMode, RevealOptions};

use crate::CliResult;

/// Reveals an image hidden in the least significant bits of a grayscale or RGB image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Carrier image that contains the hidden image
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub image: PathBuf,

    /// Revealed image will be stored as file, defaults to `<image>_revealed.<ext>`
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,

    /// Reads the carrier as `L` (grayscale) or `RGB` instead of its decoded mode
    #[arg(short = 'm', long = "mode", value_name = "mode")]
    pub mode: Option<ImageMode>,
}

impl RevealArgs {
    pub fn run(self, mut options: RevealOptions) -> CliResult<()> {
        if let Some(mode) = self.mode {
            options = options.with_mode(mode);
        }
        let written =
            chromaveil_core::commands::reveal(&self.image, self.output.as_deref(), options)?;
        println!("{}", written.display());

        Ok(())
    }
}
