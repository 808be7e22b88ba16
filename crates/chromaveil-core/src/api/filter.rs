use std::path::{Path, PathBuf};

use log::info;

use crate::media::{labeled_path, Persist, Picture};
use crate::{ChromaveilError, DeficiencyKind, FilterOptions, Result};

pub fn prepare() -> FilterApi {
    FilterApi::default()
}

#[derive(Default, Debug)]
pub struct FilterApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: FilterOptions,
}

impl FilterApi {
    /// Use the given filter options
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// The RGB image the deficiency is simulated on, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_deficiency(mut self, deficiency: DeficiencyKind) -> Self {
        self.options.deficiency = deficiency;
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed the output is stored next to the image,
    /// named after the deficiency, e.g. `lenna_red.png`
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Execute the filter and return the path the filtered image was stored at
    pub fn execute(self) -> Result<PathBuf> {
        let Some(image) = self.image else {
            return Err(ChromaveilError::InputNotSet);
        };
        let deficiency = self.options.deficiency;
        let output = self
            .output
            .unwrap_or_else(|| labeled_path(&image, deficiency.name()));

        let picture = Picture::from_file(&image)?;
        let filtered = picture.with_pixels(crate::filter(picture.pixels(), deficiency)?)?;
        filtered.save_as(&output)?;

        info!(
            "simulated {deficiency} deficiency: {} -> {}",
            image.display(),
            output.display()
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    use super::*;
    use crate::Pixel;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let input = temp_dir.path().join("white.png");
        RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]))
            .save(&input)
            .expect("Failed to write carrier image");

        let output = crate::api::filter::prepare()
            .with_image(&input)
            .with_deficiency(DeficiencyKind::Red)
            .execute()
            .expect("Failed to filter image");

        assert_eq!(output, temp_dir.path().join("white_red.png"));
        let filtered = Picture::from_file(&output).expect("Failed to read filtered image");
        assert_eq!(filtered.dimensions(), (3, 2));
        assert!(filtered.pixels().iter().all(|p| *p == Pixel::Rgb(254, 255, 255)));
    }

    #[test]
    fn should_fail_without_image() {
        assert!(matches!(
            prepare().execute(),
            Err(ChromaveilError::InputNotSet)
        ));
    }

    #[test]
    fn should_refuse_grayscale_images() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let input = temp_dir.path().join("gray.png");
        GrayImage::from_pixel(1, 1, Luma([7]))
            .save(&input)
            .expect("Failed to write gray image");

        let result = prepare()
            .with_image(&input)
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        assert!(matches!(
            result,
            Err(ChromaveilError::PixelVariantMismatch { index: 0, .. })
        ));
        assert!(!temp_dir.path().join("out.png").exists());
    }

    #[test]
    fn should_filter_with_options() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let input = temp_dir.path().join("red.png");
        RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]))
            .save(&input)
            .expect("Failed to write carrier image");

        let output = prepare()
            .with_image(&input)
            .with_options(FilterOptions::default().with_deficiency(DeficiencyKind::Blue))
            .execute()
            .expect("Failed to filter image");

        assert_eq!(output, temp_dir.path().join("red_blue.png"));
        let filtered = Picture::from_file(&output).expect("Failed to read filtered image");
        assert_eq!(filtered.pixels(), &[Pixel::Rgb(242, 0, 0)]);
    }
}
