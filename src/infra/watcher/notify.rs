use crate::{
    application::watcher::interface::{EventReceiver, EventSourceInterface},
    domain::FilesystemEvent,
};
use notify::{
    Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{CreateKind, ModifyKind, RenameMode},
};
use std::path::{Path, PathBuf};
use tokio::{io, sync::mpsc};
use tracing::{error, trace};

const EVENT_BUFFER: usize = 100;

/// Event source backed by the platform's native notification API.
///
/// Only creations are forwarded, and a directory moved in from outside the
/// watch counts as one. Everything else notify reports is dropped at the
/// callback.
pub struct NotifyEventSource {
    watcher: RecommendedWatcher,
    root: Option<PathBuf>,
}

impl NotifyEventSource {
    pub fn new() -> io::Result<(Self, EventReceiver)> {
        let (watch_tx, watch_rx) = mpsc::channel(EVENT_BUFFER);
        let mut filter = CreationFilter::default();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    trace!("Notify event: {event:?}");
                    for event in filter.accept(event) {
                        if watch_tx.blocking_send(event).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => error!("Watch error: {err}"),
            },
            Config::default(),
        )
        .map_err(io::Error::other)?;

        Ok((
            Self {
                watcher,
                root: None,
            },
            watch_rx,
        ))
    }
}

impl EventSourceInterface for NotifyEventSource {
    fn start(&mut self, root: &Path, recursive: bool) -> io::Result<()> {
        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        self.watcher.watch(root, mode).map_err(io::Error::other)?;
        self.root = Some(root.to_path_buf());

        Ok(())
    }

    fn stop(mut self) -> io::Result<()> {
        // Dropping the watcher drops the sender held by its callback, so the
        // channel closes even when the root is already gone.
        if let Some(root) = self.root.take() {
            if let Err(err) = self.watcher.unwatch(&root) {
                error!("Failed to unwatch {}: {err}", root.display());
            }
        }

        Ok(())
    }
}

/// Turns raw notify events into creation events.
///
/// A rename whose source was seen under the watch is a move inside the tree,
/// not an arrival, and is dropped.
#[derive(Debug, Default)]
pub struct CreationFilter {
    pending_rename: Option<usize>,
}

impl CreationFilter {
    pub fn accept(&mut self, event: Event) -> Vec<FilesystemEvent> {
        match event.kind {
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                self.pending_rename = event.tracker();
                Vec::new()
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                let tracker = event.tracker();
                if tracker.is_some() && tracker == self.pending_rename {
                    self.pending_rename = None;
                    return Vec::new();
                }
                probed(event.paths)
            }
            _ => creation_events(event),
        }
    }
}

pub fn creation_events(event: Event) -> Vec<FilesystemEvent> {
    match event.kind {
        EventKind::Create(CreateKind::Folder) => {
            event.paths.into_iter().map(FilesystemEvent::directory).collect()
        }
        EventKind::Create(CreateKind::File) => {
            event.paths.into_iter().map(FilesystemEvent::file).collect()
        }
        EventKind::Create(_)
        | EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Any)) => {
            probed(event.paths)
        }
        _ => Vec::new(),
    }
}

fn probed(paths: Vec<PathBuf>) -> Vec<FilesystemEvent> {
    paths
        .into_iter()
        .map(|path| {
            if path.is_dir() {
                FilesystemEvent::directory(path)
            } else {
                FilesystemEvent::file(path)
            }
        })
        .collect()
}
