use crate::{
    application::{copy::interface::TreeCopierInterface, log::interface::LoggerInterface},
    domain::{CopyError, CopyOutcome, DispatchOutcome, FilesystemEvent},
    utils::fs::destination_for,
};
use std::path::{Path, PathBuf};

/// Turns directory-creation events into copies under `destination_root`.
///
/// Every event is handled to completion before `handle` returns, and a failed
/// copy is logged and folded into the returned outcome so the caller can keep
/// consuming events.
pub struct DirectoryCreationHandler<L: LoggerInterface, C: TreeCopierInterface> {
    destination_root: PathBuf,
    debug: bool,
    logger: L,
    copier: C,
}

impl<L: LoggerInterface, C: TreeCopierInterface> DirectoryCreationHandler<L, C> {
    pub fn new(destination_root: PathBuf, debug: bool, logger: L, copier: C) -> Self {
        Self {
            destination_root,
            debug,
            logger,
            copier,
        }
    }

    pub fn handle(&self, event: &FilesystemEvent) -> DispatchOutcome {
        if self.debug {
            self.logger.debug(&format!("Event detected: {event:?}"));
        }

        if !event.is_directory {
            return DispatchOutcome::Skipped;
        }

        let source = &event.source_path;
        self.logger
            .info(&format!("New directory created: {}", source.display()));

        let outcome = match destination_for(source, &self.destination_root) {
            Some(destination) => self.copy(source, destination),
            None => CopyOutcome::Failed {
                source: source.clone(),
                destination: self.destination_root.clone(),
                error: CopyError::NoFinalSegment(source.clone()),
            },
        };

        self.log_outcome(&outcome);
        DispatchOutcome::Handled(outcome)
    }

    fn copy(&self, source: &Path, destination: PathBuf) -> CopyOutcome {
        match self.copier.copy_tree(source, &destination) {
            Ok(report) => CopyOutcome::Copied {
                source: source.to_path_buf(),
                destination,
                report,
            },
            Err(error) => CopyOutcome::Failed {
                source: source.to_path_buf(),
                destination,
                error,
            },
        }
    }

    fn log_outcome(&self, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Copied {
                source,
                destination,
                report,
            } => {
                self.logger.info(&format!(
                    "Copied {} to {}",
                    source.display(),
                    destination.display()
                ));
                if self.debug {
                    self.logger.debug(&format!(
                        "Copy report for {}: {} directories, {} files, {} bytes",
                        destination.display(),
                        report.directories,
                        report.files,
                        report.bytes
                    ));
                }
            }
            CopyOutcome::Failed {
                source,
                destination,
                error,
            } => self.logger.error(&format!(
                "Failed to copy {} to {}: {error}",
                source.display(),
                destination.display()
            )),
        }
    }
}
