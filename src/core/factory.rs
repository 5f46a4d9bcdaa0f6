//! Factory for loggers sharing one destination and one formatting policy

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

use super::destination::{self, Destination, EmitterCore};
use super::log_stream::LogStream;
use super::logger::Logger;
use super::observer::LogObserver;
use super::severity::Severity;
use super::style::StyleSheet;

/// Default severity labels, in stream order.
const DEFAULT_LABELS: [&str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];

/// Logger name the factory signs its own diagnostic lines with.
const FACTORY_LOGGER_NAME: &str = "LoggerFactory";

/// Mints [`Logger`]s bound to one destination under one formatting policy.
///
/// All decoration is computed here, once: the application prefix when the
/// factory is configured, the severity tags when it is built, the padded
/// logger name when a logger is created. Streams only concatenate the
/// precomputed strings per statement.
///
/// # Examples
///
/// ```
/// use micro_logger::LoggerFactory;
///
/// let factory = LoggerFactory::builder(std::io::stdout())
///     .app_name("Billing")
///     .name_padding(12)
///     .build();
///
/// let logger = factory.create("invoices");
/// logger.info.append("run started, batch ").append(42);
/// ```
pub struct LoggerFactory {
    destination: Destination,
    app_prefix: String,
    severity_tags: [String; 4],
    style: StyleSheet,
    name_padding: i32,
    always_flush: bool,
    thread_safe: bool,
    observer: Option<Arc<dyn LogObserver>>,
    observer_lock: Arc<Mutex<()>>,
}

impl LoggerFactory {
    /// Start configuring a factory that writes to `destination`.
    pub fn builder<W: Write + Send + 'static>(destination: W) -> LoggerFactoryBuilder {
        LoggerFactoryBuilder::new(destination)
    }

    /// Factory with every default: no application name, color on, no name
    /// padding, no flush after writes, thread safe, no observer.
    pub fn new<W: Write + Send + 'static>(destination: W) -> Self {
        Self::builder(destination).build()
    }

    /// Derive a factory for a new destination, keeping the base factory's
    /// textual policy.
    ///
    /// The application prefix and severity tags are copied as already
    /// formatted, never recomputed; padding, flush, and thread-safety flags
    /// carry over. The destination and observer are rebound, and the new
    /// factory gets locks of its own, so the two factories never contend.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro_logger::LoggerFactory;
    ///
    /// let base = LoggerFactory::builder(std::io::stdout())
    ///     .app_name("Relay")
    ///     .always_flush(true)
    ///     .build();
    ///
    /// let derived = LoggerFactory::factory_from(std::io::sink(), &base, None);
    /// derived.create("disk").info.append("same look, new destination");
    /// ```
    pub fn factory_from<W: Write + Send + 'static>(
        new_destination: W,
        base: &LoggerFactory,
        new_observer: Option<Arc<dyn LogObserver>>,
    ) -> Self {
        let factory = Self {
            destination: destination::share(new_destination),
            app_prefix: base.app_prefix.clone(),
            severity_tags: base.severity_tags.clone(),
            style: base.style,
            name_padding: base.name_padding,
            always_flush: base.always_flush,
            thread_safe: base.thread_safe,
            observer: new_observer,
            observer_lock: Arc::new(Mutex::new(())),
        };
        if !factory.thread_safe {
            factory.warn_not_thread_safe();
        }
        factory
    }

    /// Mint a logger named `name`.
    ///
    /// The padded, decorated name is fixed here; later configuration changes
    /// on the factory do not reach loggers that already exist.
    pub fn create(&self, name: &str) -> Logger {
        self.create_styled(name, "")
    }

    /// Mint a logger whose name carries an extra accent escape, for example
    /// `"\x1b[35m"` for magenta. The accent only applies while color is
    /// enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro_logger::LoggerFactory;
    ///
    /// let factory = LoggerFactory::new(std::io::stdout());
    /// let logger = factory.create_with_accent("audit", "\x1b[35m");
    /// logger.info.append("trail opened");
    /// ```
    pub fn create_with_accent(&self, name: &str, accent: &str) -> Logger {
        self.create_styled(name, accent)
    }

    /// Width logger names are padded to; `<= 0` means no padding.
    pub fn name_padding(&self) -> i32 {
        self.name_padding
    }

    /// Change the name padding for loggers created from now on.
    pub fn set_name_padding(&mut self, padding: i32) {
        self.name_padding = padding;
    }

    /// Whether emission serializes across threads.
    pub fn thread_safe(&self) -> bool {
        self.thread_safe
    }

    /// Toggle thread safety for loggers created from now on.
    ///
    /// Disabling is loud: every call that turns safety off emits a warning
    /// line through the factory's own diagnostic logger, ahead of whatever
    /// gets logged next.
    pub fn set_thread_safe(&mut self, thread_safe: bool) {
        self.thread_safe = thread_safe;
        if !thread_safe {
            self.warn_not_thread_safe();
        }
    }

    fn create_styled(&self, name: &str, accent: &str) -> Logger {
        let logger_name = self.style.logger_name(name, self.name_padding, accent);
        let core = EmitterCore {
            destination: Arc::clone(&self.destination),
            always_flush: self.always_flush,
            thread_safe: self.thread_safe,
            observer: self.observer.clone(),
            observer_lock: Arc::clone(&self.observer_lock),
        };
        let stream = |severity: Severity| {
            LogStream::new(
                severity,
                self.severity_tags[severity as usize].clone(),
                logger_name.clone(),
                self.app_prefix.clone(),
                core.clone(),
            )
        };
        Logger::new(
            stream(Severity::Debug),
            stream(Severity::Info),
            stream(Severity::Warning),
            stream(Severity::Error),
            self.style,
        )
    }

    fn warn_not_thread_safe(&self) {
        self.create(FACTORY_LOGGER_NAME).warning.append(
            "thread safety disabled: concurrent statements may interleave at the destination",
        );
    }
}

/// Fluent configuration for [`LoggerFactory`], obtained from
/// [`LoggerFactory::builder`].
///
/// # Examples
///
/// ```
/// use micro_logger::LoggerFactory;
///
/// let factory = LoggerFactory::builder(std::io::stdout())
///     .app_name("Importer")
///     .severity_labels(["DBG", "INF", "WRN", "ERR"])
///     .use_color(false)
///     .always_flush(true)
///     .build();
/// # let _ = factory;
/// ```
pub struct LoggerFactoryBuilder {
    destination: Destination,
    app_name: String,
    labels: [String; 4],
    use_color: bool,
    name_padding: i32,
    always_flush: bool,
    thread_safe: bool,
    observer: Option<Arc<dyn LogObserver>>,
}

impl LoggerFactoryBuilder {
    fn new<W: Write + Send + 'static>(destination: W) -> Self {
        Self {
            destination: destination::share(destination),
            app_name: String::new(),
            labels: DEFAULT_LABELS.map(String::from),
            use_color: true,
            name_padding: 0,
            always_flush: false,
            thread_safe: true,
            observer: None,
        }
    }

    /// Application name shown, dimmed, ahead of every line. Empty by
    /// default, which leaves lines unprefixed.
    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Replace the four severity labels, in debug, info, warning, error
    /// order. Labels are padded to their common width in the emitted line.
    #[must_use = "builder methods return a new value"]
    pub fn severity_labels(mut self, labels: [&str; 4]) -> Self {
        self.labels = labels.map(String::from);
        self
    }

    /// Enable or disable ANSI decoration. On by default.
    #[must_use = "builder methods return a new value"]
    pub fn use_color(mut self, color: bool) -> Self {
        self.use_color = color;
        self
    }

    /// Left-justify logger names to `width` columns; `<= 0` disables
    /// padding. Disabled by default.
    #[must_use = "builder methods return a new value"]
    pub fn name_padding(mut self, width: i32) -> Self {
        self.name_padding = width;
        self
    }

    /// Flush the destination after every line. Off by default.
    #[must_use = "builder methods return a new value"]
    pub fn always_flush(mut self, flush: bool) -> Self {
        self.always_flush = flush;
        self
    }

    /// Forward every emitted line to `observer`, after the destination
    /// write.
    #[must_use = "builder methods return a new value"]
    pub fn observer(mut self, observer: Arc<dyn LogObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Serialize emission across threads. On by default; building with it
    /// off is announced with a warning line through the factory's own
    /// diagnostic logger.
    #[must_use = "builder methods return a new value"]
    pub fn thread_safe(mut self, thread_safe: bool) -> Self {
        self.thread_safe = thread_safe;
        self
    }

    /// Finish configuration and produce the factory.
    pub fn build(self) -> LoggerFactory {
        let style = StyleSheet {
            color: self.use_color,
        };
        let app_prefix = style.app_prefix(&self.app_name);
        let width = self
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let severity_tags = [
            style.severity_tag(Severity::Debug, &self.labels[0], width),
            style.severity_tag(Severity::Info, &self.labels[1], width),
            style.severity_tag(Severity::Warning, &self.labels[2], width),
            style.severity_tag(Severity::Error, &self.labels[3], width),
        ];

        let factory = LoggerFactory {
            destination: self.destination,
            app_prefix,
            severity_tags,
            style,
            name_padding: self.name_padding,
            always_flush: self.always_flush,
            thread_safe: self.thread_safe,
            observer: self.observer,
            observer_lock: Arc::new(Mutex::new(())),
        };
        if !factory.thread_safe {
            factory.warn_not_thread_safe();
        }
        factory
    }
}
