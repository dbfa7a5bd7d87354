use crate::{
    application::copy::interface::TreeCopierInterface,
    domain::{CopyError, CopyFailure, CopyReport},
};
use filetime::FileTime;
use std::{
    fs::{self, Metadata},
    io,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Recursive copy that keeps going past individual entry failures and
/// reports them once the walk is done. Symlinks are copied as their targets.
/// Permissions and access/modification times follow the source.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkdirCopier;

impl TreeCopierInterface for WalkdirCopier {
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<CopyReport, CopyError> {
        let metadata = fs::metadata(source)
            .map_err(|err| CopyError::io("copy_tree.stat_source", source, err))?;
        if !metadata.is_dir() {
            return Err(CopyError::SourceNotDirectory(source.to_path_buf()));
        }
        if destination.starts_with(source) {
            return Err(CopyError::DestinationInsideSource {
                source_dir: source.to_path_buf(),
                destination: destination.to_path_buf(),
            });
        }
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| CopyError::io("copy_tree.create_parent", parent, err))?;
        }
        match fs::create_dir(destination) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(CopyError::DestinationExists(destination.to_path_buf()));
            }
            Err(err) => return Err(CopyError::io("copy_tree.create_root", destination, err)),
        }

        let mut copy = TreeCopy {
            report: CopyReport {
                directories: 1,
                ..CopyReport::default()
            },
            failures: Vec::new(),
            directories: vec![(source.to_path_buf(), destination.to_path_buf())],
        };

        for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(source).to_path_buf();
                    copy.fail(path, err);
                    continue;
                }
            };

            let Ok(relative) = entry.path().strip_prefix(source) else {
                copy.fail(entry.path(), "entry escaped the source tree");
                continue;
            };
            let target = destination.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                copy.directory(entry.path(), target);
            } else if file_type.is_file() {
                copy.file(entry.path(), &target);
            } else {
                copy.fail(entry.path(), "unsupported file type");
            }
        }

        copy.finish()
    }
}

struct TreeCopy {
    report: CopyReport,
    failures: Vec<CopyFailure>,
    directories: Vec<(PathBuf, PathBuf)>,
}

impl TreeCopy {
    fn directory(&mut self, source: &Path, target: PathBuf) {
        match fs::create_dir(&target) {
            Ok(()) => {
                self.report.directories += 1;
                self.directories.push((source.to_path_buf(), target));
            }
            Err(err) => self.fail(source, err),
        }
    }

    fn file(&mut self, source: &Path, target: &Path) {
        let copied = fs::copy(source, target).and_then(|bytes| {
            let metadata = fs::metadata(source)?;
            apply_times(target, &metadata)?;
            Ok(bytes)
        });

        match copied {
            Ok(bytes) => {
                self.report.files += 1;
                self.report.bytes += bytes;
            }
            Err(err) => self.fail(source, err),
        }
    }

    fn fail(&mut self, path: impl Into<PathBuf>, detail: impl std::fmt::Display) {
        self.failures.push(CopyFailure::new(path, detail));
    }

    fn finish(mut self) -> Result<CopyReport, CopyError> {
        // Deepest first so a read-only parent does not block its children.
        while let Some((source, target)) = self.directories.pop() {
            let applied = fs::metadata(&source).and_then(|metadata| {
                apply_times(&target, &metadata)?;
                fs::set_permissions(&target, metadata.permissions())
            });
            if let Err(err) = applied {
                self.fail(source, err);
            }
        }

        if self.failures.is_empty() {
            Ok(self.report)
        } else {
            Err(CopyError::Incomplete {
                failures: self.failures,
            })
        }
    }
}

fn apply_times(target: &Path, metadata: &Metadata) -> io::Result<()> {
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(metadata),
        FileTime::from_last_modification_time(metadata),
    )
}
