pub mod copy;
pub mod log;
mod mirror;
pub mod watcher;

pub use mirror::DirectoryMirror;
