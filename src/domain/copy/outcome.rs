use crate::domain::CopyError;
use std::path::PathBuf;

/// Counters gathered while copying a tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub directories: u64,
    pub files: u64,
    pub bytes: u64,
}

#[derive(Debug)]
pub enum CopyOutcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        report: CopyReport,
    },
    Failed {
        source: PathBuf,
        destination: PathBuf,
        error: CopyError,
    },
}

/// Terminal state of a single event.
#[derive(Debug)]
pub enum DispatchOutcome {
    Skipped,
    Handled(CopyOutcome),
}
