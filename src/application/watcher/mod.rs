pub mod dispatcher;
pub mod interface;

pub use dispatcher::DirectoryCreationHandler;
