use crate::{
    application::{
        copy::interface::TreeCopierInterface,
        log::interface::LoggerInterface,
        watcher::interface::{EventReceiver, EventSourceInterface},
    },
    cfg::WatchConfiguration,
    domain::{CopyError, CopyReport, FilesystemEvent},
};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    io,
    sync::mpsc::{self, Sender},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

/// Logger double keeping every message in emission order.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl LoggerInterface for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

type CopyScript = fn(&Path, &Path) -> Result<CopyReport, CopyError>;

/// Copier double recording its calls and answering from a script.
#[derive(Clone)]
pub struct FakeCopier {
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    script: CopyScript,
}

impl FakeCopier {
    pub fn succeeding() -> Self {
        Self::scripted(|_, _| Ok(CopyReport::default()))
    }

    pub fn scripted(script: CopyScript) -> Self {
        Self {
            calls: Arc::default(),
            script,
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TreeCopierInterface for FakeCopier {
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<CopyReport, CopyError> {
        self.calls
            .lock()
            .unwrap()
            .push((source.to_path_buf(), destination.to_path_buf()));
        (self.script)(source, destination)
    }
}

/// Event source double that replays a fixed list of events on `start`.
pub struct ScriptedSource {
    tx: Option<Sender<FilesystemEvent>>,
    script: Vec<FilesystemEvent>,
    started: Arc<Mutex<Option<(PathBuf, bool)>>>,
    fail_start: bool,
    fail_stop: bool,
    close_after_replay: bool,
}

impl ScriptedSource {
    pub fn new(script: Vec<FilesystemEvent>) -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::channel(script.len().max(1));

        (
            Self {
                tx: Some(tx),
                script,
                started: Arc::default(),
                fail_start: false,
                fail_stop: false,
                close_after_replay: false,
            },
            rx,
        )
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn closing_after_replay(mut self) -> Self {
        self.close_after_replay = true;
        self
    }

    pub fn started(&self) -> Arc<Mutex<Option<(PathBuf, bool)>>> {
        self.started.clone()
    }
}

impl EventSourceInterface for ScriptedSource {
    fn start(&mut self, root: &Path, recursive: bool) -> io::Result<()> {
        if self.fail_start {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "watch root does not exist",
            ));
        }

        *self.started.lock().unwrap() = Some((root.to_path_buf(), recursive));

        if let Some(tx) = &self.tx {
            for event in self.script.drain(..) {
                tx.try_send(event)
                    .map_err(|_| io::Error::other("scripted event buffer full"))?;
            }
        }

        if self.close_after_replay {
            self.tx = None;
        }

        Ok(())
    }

    fn stop(self) -> io::Result<()> {
        if self.fail_stop {
            return Err(io::Error::other("watch root was removed"));
        }

        Ok(())
    }
}

pub fn config(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> WatchConfiguration {
    WatchConfiguration {
        source_path: source.into(),
        destination_path: destination.into(),
        recursive: true,
        debug: false,
        poll_interval: Duration::from_millis(10),
    }
}
