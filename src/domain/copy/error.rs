use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Why a directory tree could not be copied.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source path {} has no final segment", .0.display())]
    NoFinalSegment(PathBuf),

    #[error("source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error(
        "destination {} is inside source {}",
        .destination.display(),
        .source_dir.display()
    )]
    DestinationInsideSource {
        source_dir: PathBuf,
        destination: PathBuf,
    },

    #[error("{operation} failed for {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// The walk finished but some entries were left behind.
    #[error("{}", describe_incomplete(.failures))]
    Incomplete { failures: Vec<CopyFailure> },
}

impl CopyError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// A single entry that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub detail: String,
}

impl CopyFailure {
    pub fn new(path: impl Into<PathBuf>, detail: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.detail)
    }
}

fn describe_incomplete(failures: &[CopyFailure]) -> String {
    match failures {
        [] => "copy incomplete".to_string(),
        [only] => format!("1 entry could not be copied ({only})"),
        [first, rest @ ..] => format!(
            "{} entries could not be copied (first: {first})",
            rest.len() + 1
        ),
    }
}
