use crate::domain::{CopyError, CopyReport};
use std::path::Path;

pub trait TreeCopierInterface {
    /// Duplicates the tree rooted at `source` into `destination`, which must
    /// not exist yet.
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<CopyReport, CopyError>;
}
