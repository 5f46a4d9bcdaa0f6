//! Named logger facade

use super::log_stream::LogStream;
use super::severity::Severity;
use super::style::StyleSheet;

/// A named logger minted by a [`LoggerFactory`](crate::LoggerFactory).
///
/// The four public streams share one formatted identity; pick the stream for
/// the severity at hand and chain appends:
///
/// ```
/// use micro_logger::LoggerFactory;
///
/// let factory = LoggerFactory::builder(std::io::stdout())
///     .app_name("Gateway")
///     .build();
///
/// let logger = factory.create("startup");
/// logger.info.append("listening on ").append(8080);
/// logger.warning.append("no TLS configured");
/// ```
///
/// Loggers hold refcounted handles to their factory's destination and locks,
/// so they keep working after the factory itself is gone.
pub struct Logger {
    pub debug: LogStream,
    pub info: LogStream,
    pub warning: LogStream,
    pub error: LogStream,
    style: StyleSheet,
}

impl Logger {
    pub(crate) fn new(
        debug: LogStream,
        info: LogStream,
        warning: LogStream,
        error: LogStream,
        style: StyleSheet,
    ) -> Self {
        Self {
            debug,
            info,
            warning,
            error,
            style,
        }
    }

    /// Borrow the stream for `severity`.
    pub fn stream(&self, severity: Severity) -> &LogStream {
        match severity {
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Replace the application name shown ahead of every line this logger
    /// emits, reformatting it under the factory's color policy.
    ///
    /// Takes `&mut self`: renaming is a configuration step and must not
    /// race with in-flight statements on the same logger.
    pub fn rename(&mut self, app_name: &str) {
        let prefix = self.style.app_prefix(app_name);
        self.debug.set_app_prefix(prefix.clone());
        self.info.set_app_prefix(prefix.clone());
        self.warning.set_app_prefix(prefix.clone());
        self.error.set_app_prefix(prefix);
    }
}
