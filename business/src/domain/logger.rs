/// Logging port used by the use cases.
///
/// The business layer never talks to a logging backend directly; the
/// presentation layer injects an adapter at wiring time.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
