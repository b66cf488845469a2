/// Logging port used by use cases and views.
///
/// Infrastructure provides the concrete sink; business code only ever
/// formats a message and hands it over.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
