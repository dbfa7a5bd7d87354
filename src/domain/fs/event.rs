use std::path::PathBuf;

/// A single creation reported by the event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemEvent {
    pub source_path: PathBuf,
    pub is_directory: bool,
}

impl FilesystemEvent {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            is_directory: true,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            is_directory: false,
        }
    }
}
