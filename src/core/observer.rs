//! Observer seam for mirroring emitted lines

/// Receives every line a factory's loggers emit, after the destination write.
///
/// The observer gets the exact bytes the destination got, decoration and
/// trailing newline included, exactly once per statement. Implementations
/// are shared across every logger of a factory and must tolerate being
/// called from any logging thread; when the factory is thread safe,
/// deliveries are serialized by a lock of their own, never held together
/// with the destination lock.
///
/// Closures implement the trait directly:
///
/// ```
/// use micro_logger::LoggerFactory;
/// use std::sync::{Arc, Mutex};
///
/// let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let factory = LoggerFactory::builder(std::io::sink())
///     .observer(Arc::new(move |line: &str| {
///         sink.lock().unwrap().push(line.to_string());
///     }))
///     .build();
///
/// let logger = factory.create("net");
/// logger.info.append("connected");
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
pub trait LogObserver: Send + Sync {
    /// Called once per emitted line with the exact bytes written.
    fn on_output_log_message(&self, line: &str);
}

impl<F> LogObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_output_log_message(&self, line: &str) {
        self(line)
    }
}
