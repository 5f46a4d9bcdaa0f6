//! Per-statement message accumulation and emission

use std::fmt::{self, Write as _};
use std::mem;

use super::destination::EmitterCore;

/// Accumulates the body of one log statement and emits the finished line
/// when dropped.
///
/// Produced by [`LogStream::append`](crate::LogStream::append); each further
/// `append` consumes the builder and returns it, so a statement reads as a
/// chain and the value stays under single ownership throughout:
///
/// ```
/// use micro_logger::LoggerFactory;
///
/// let factory = LoggerFactory::new(std::io::sink());
/// let logger = factory.create("jobs");
/// logger.info.append("finished ").append(17).append(" tasks");
/// ```
///
/// The line is written exactly once, by the final owner's drop at the end of
/// the enclosing statement. Moving the builder around, through helpers or
/// into collections, moves that obligation with it; a moved-from builder no
/// longer exists and cannot emit. The timestamp was already fixed when the
/// stream created the builder, accumulation time does not shift it.
pub struct MessageBuilder {
    /// Everything left of the body, formatted by the stream at creation.
    prefix: String,
    body: String,
    core: EmitterCore,
}

impl MessageBuilder {
    pub(crate) fn new(prefix: String, core: EmitterCore) -> Self {
        Self {
            prefix,
            body: String::new(),
            core,
        }
    }

    /// Append a value's `Display` form to the message body.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        let _ = write!(self.body, "{}", value);
        self
    }
}

impl Drop for MessageBuilder {
    fn drop(&mut self) {
        // Reuses the prefix allocation as the line buffer.
        let mut line = mem::take(&mut self.prefix);
        line.push_str(&self.body);
        line.push('\n');
        self.core.deliver(&line);
    }
}
