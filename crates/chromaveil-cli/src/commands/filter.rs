use std::path::PathBuf;

use clap::Args;
use chromaveil_core::{DeficiencyKind, FilterOptions};

use crate::CliResult;

/// Simulates a color vision deficiency on an RGB image
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// RGB image file such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Filtered image will be stored as file, defaults to `<image>_<deficiency>.<ext>`
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,

    /// The deficiency to simulate: red, green, blue or none
    #[arg(short, long, value_name = "deficiency", default_value = "none")]
    pub deficiency: DeficiencyKind,
}

impl FilterArgs {
    pub fn run(self) -> CliResult<()> {
        let options = FilterOptions::default().with_deficiency(self.deficiency);
        let written =
            chromaveil_core::commands::filter(&self.image, self.output.as_deref(), options)?;
        println!("{}", written.display());

        Ok(())
    }
}
