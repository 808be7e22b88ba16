use std::path::{Path, PathBuf};

use log::info;

use crate::media::{labeled_path, Persist, Picture};
use crate::{reveal_with_options, ChromaveilError, Result, RevealOptions};

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    secret_image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: RevealOptions,
}

impl RevealApi {
    /// Use the given reveal options
    pub fn with_options(mut self, options: RevealOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the carrier image that contains the hidden image
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the revealed image will be saved to
    pub fn into_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed the revealed image is stored next to the carrier,
    /// e.g. `hidden1_revealed.bmp`
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Execute the reveal and return the path the revealed image was stored at
    pub fn execute(self) -> Result<PathBuf> {
        let Some(secret_image) = self.secret_image else {
            return Err(ChromaveilError::InputNotSet);
        };
        let output = self
            .output
            .unwrap_or_else(|| labeled_path(&secret_image, "revealed"));

        let mut picture = Picture::from_file(&secret_image)?;
        if let Some(mode) = self.options.mode.clone() {
            picture = picture.into_mode(mode)?;
        }
        let revealed = reveal_with_options(picture.pixels(), picture.mode(), &self.options)?;
        picture.with_pixels(revealed)?.save_as(&output)?;

        info!(
            "revealed hidden image: {} -> {}",
            secret_image.display(),
            output.display()
        );
        Ok(output)
    }
}
