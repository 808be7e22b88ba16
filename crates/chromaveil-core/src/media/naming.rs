use std::path::{Path, PathBuf};

/// Derives an output file name by inserting `_<label>` before the extension,
/// `lenna.png` with label `red` becomes `lenna_red.png`.
///
/// A path without extension gets the label appended, a path without a file
/// name at all is turned into `<label>.png` inside it.
pub fn labeled_path(path: &Path, label: &str) -> PathBuf {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return path.join(format!("{label}.png"));
    };

    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{label}.{ext}"),
        None => format!("{stem}_{label}"),
    };
    path.with_file_name(file_name)
}
