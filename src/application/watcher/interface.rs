use crate::domain::FilesystemEvent;
use std::path::Path;
use tokio::{io, sync::mpsc::Receiver};

pub type EventReceiver = Receiver<FilesystemEvent>;

/// Producer of creation events. Events flow through the receiver handed out
/// alongside the source when it is built.
pub trait EventSourceInterface {
    fn start(&mut self, root: &Path, recursive: bool) -> io::Result<()>;

    /// Stops watching and closes the event channel once buffered events are
    /// consumed.
    fn stop(self) -> io::Result<()>;
}
