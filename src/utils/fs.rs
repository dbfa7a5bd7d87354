use std::path::{Path, PathBuf};

/// Destination of a copied directory: the final segment of `source` placed
/// directly under `destination_root`.
///
/// Returns `None` when `source` has no final segment (`/`, or a path ending
/// in `..`).
pub fn destination_for<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination_root: Q,
) -> Option<PathBuf> {
    let name = source.as_ref().file_name()?;
    Some(destination_root.as_ref().join(name))
}
