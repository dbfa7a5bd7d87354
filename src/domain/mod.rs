mod copy;
mod fs;

pub use copy::CopyError;
pub use copy::CopyFailure;
pub use copy::CopyOutcome;
pub use copy::CopyReport;
pub use copy::DispatchOutcome;
pub use fs::FilesystemEvent;
