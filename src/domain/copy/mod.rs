mod error;
mod outcome;

pub use error::CopyError;
pub use error::CopyFailure;
pub use outcome::CopyOutcome;
pub use outcome::CopyReport;
pub use outcome::DispatchOutcome;
