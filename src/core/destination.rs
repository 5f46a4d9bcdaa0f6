//! Shared destination plumbing
//!
//! A factory and every logger it mints hold the same refcounted handles, so
//! loggers stay valid for as long as anything can still emit through them.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

use super::observer::LogObserver;

/// Handle to the byte sink all loggers from one factory write into.
///
/// The mutex is the write lock: one fully formatted line goes out per
/// acquisition, so concurrent emitters never interleave mid-line.
pub type Destination = Arc<Mutex<Box<dyn Write + Send>>>;

pub fn share<W: Write + Send + 'static>(writer: W) -> Destination {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// Everything a builder needs to push one finished line out.
///
/// Cloned from the factory into each stream and from there into each
/// builder; all heavy state sits behind `Arc`, the flags are copied.
#[derive(Clone)]
pub struct EmitterCore {
    pub destination: Destination,
    pub always_flush: bool,
    pub thread_safe: bool,
    pub observer: Option<Arc<dyn LogObserver>>,
    /// Serializes observer delivery, independently of the destination lock.
    pub observer_lock: Arc<Mutex<()>>,
}

impl EmitterCore {
    /// Write one line to the destination, then hand it to the observer.
    ///
    /// The destination lock is released before the observer runs; the two
    /// locks are never held together, so a slow observer cannot stall
    /// destination writers and a slow destination cannot stall observers of
    /// other emissions. Write and flush failures are discarded. When thread
    /// safety is off the observer lock is skipped entirely.
    pub fn deliver(&self, line: &str) {
        {
            let mut sink = self.destination.lock();
            let _ = sink.write_all(line.as_bytes());
            if self.always_flush {
                let _ = sink.flush();
            }
        }

        if let Some(observer) = &self.observer {
            if self.thread_safe {
                let _guard = self.observer_lock.lock();
                observer.on_output_log_message(line);
            } else {
                observer.on_output_log_message(line);
            }
        }
    }
}
