//! Severity-bound emitters and their usage counters

use std::fmt;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use super::destination::EmitterCore;
use super::message_builder::MessageBuilder;
use super::severity::Severity;
use super::timestamp;

/// Usage counters of one stream.
///
/// Updated the moment a statement starts, before any formatting, so the
/// numbers are current even while the statement is still accumulating.
/// Useful for tests and cheap health checks.
///
/// # Example
///
/// ```
/// use micro_logger::LoggerFactory;
///
/// let factory = LoggerFactory::new(std::io::sink());
/// let logger = factory.create("poller");
///
/// logger.info.append("tick");
/// logger.info.append("tock");
///
/// assert_eq!(logger.info.stats().call_count(), 2);
/// assert!(logger.info.stats().last_call_epoch_secs() > 0);
/// assert_eq!(logger.error.stats().call_count(), 0);
/// ```
#[derive(Debug)]
pub struct StreamStats {
    /// Epoch seconds of the most recent call, 0 until the stream is used
    last_call_epoch_secs: AtomicI64,

    /// Number of statements started on this stream
    call_count: AtomicU64,
}

impl StreamStats {
    pub(crate) const fn new() -> Self {
        Self {
            last_call_epoch_secs: AtomicI64::new(0),
            call_count: AtomicU64::new(0),
        }
    }

    /// Epoch seconds of the most recent call, 0 if the stream is unused.
    #[inline]
    pub fn last_call_epoch_secs(&self) -> i64 {
        self.last_call_epoch_secs.load(Ordering::Relaxed)
    }

    /// Number of statements started on this stream.
    #[inline]
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    #[inline]
    fn record(&self, epoch_millis: i64) {
        self.last_call_epoch_secs
            .store(epoch_millis.div_euclid(1000), Ordering::Relaxed);
        self.call_count.fetch_add(1, Ordering::Relaxed);
    }
}

/// One severity's emitter within a [`Logger`](crate::Logger).
///
/// Holds the strings that never change between statements: the severity tag,
/// the decorated logger name, and the application prefix, all precomputed by
/// the factory. Each [`append`](LogStream::append) starts a fresh statement.
pub struct LogStream {
    severity: Severity,
    severity_tag: String,
    logger_name: String,
    app_prefix: String,
    stats: StreamStats,
    core: EmitterCore,
}

impl LogStream {
    pub(crate) fn new(
        severity: Severity,
        severity_tag: String,
        logger_name: String,
        app_prefix: String,
        core: EmitterCore,
    ) -> Self {
        Self {
            severity,
            severity_tag,
            logger_name,
            app_prefix,
            stats: StreamStats::new(),
            core,
        }
    }

    /// Severity this stream emits at.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Usage counters of this stream.
    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }

    /// Start a new statement whose first fragment is `value`.
    ///
    /// The clock is sampled and the counters move first, before any
    /// formatting, so the emitted line carries the invocation instant no
    /// matter how long the statement keeps accumulating. The returned
    /// builder emits on drop at the end of the statement.
    pub fn append<T: fmt::Display>(&self, value: T) -> MessageBuilder {
        let now = timestamp::epoch_millis();
        self.stats.record(now);

        let mut prefix = String::with_capacity(self.app_prefix.len() + 64);
        prefix.push_str(&self.app_prefix);
        prefix.push_str(&timestamp::format_epoch_millis(now));
        prefix.push_str(" | ");
        prefix.push_str(&self.severity_tag);
        prefix.push_str(" | ");
        prefix.push_str(&self.logger_name);
        prefix.push_str(" | ");

        MessageBuilder::new(prefix, self.core.clone()).append(value)
    }

    pub(crate) fn set_app_prefix(&mut self, app_prefix: String) {
        self.app_prefix = app_prefix;
    }
}
