pub mod copy;
pub mod log;
pub mod watcher;
