mod event;

pub use event::FilesystemEvent;
