use std::{path::PathBuf, time::Duration};

/// Startup settings; built once and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfiguration {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub recursive: bool,
    pub debug: bool,
    pub poll_interval: Duration,
}
