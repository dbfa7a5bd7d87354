use crate::application::log::interface::LoggerInterface;
use tracing::{debug, error, info};

/// Forwards pipeline messages to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl LoggerInterface for TracingLogger {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn debug(&self, message: &str) {
        debug!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Installs the `fmt` subscriber, lowering the level to `DEBUG` when asked.
pub fn init(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(level).init();
}
