use std::path::{Path, PathBuf};

use crate::{FilterOptions, Result, RevealOptions};

pub fn filter(image: &Path, output: Option<&Path>, options: FilterOptions) -> Result<PathBuf> {
    crate::api::filter::prepare()
        .with_options(options)
        .with_image(image)
        .use_output(output)
        .execute()
}

pub fn reveal(
    secret_image: &Path,
    output: Option<&Path>,
    options: RevealOptions,
) -> Result<PathBuf> {
    crate::api::reveal::prepare()
        .with_options(options)
        .from_secret_file(secret_image)
        .use_output(output)
        .execute()
}
