/// Sink for the messages the watch pipeline emits.
pub trait LoggerInterface {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}
