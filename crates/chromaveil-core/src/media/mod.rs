mod naming;
mod picture;

use std::path::Path;

pub use naming::labeled_path;
pub use picture::Picture;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
