//! Logging macros for format-style call sites.
//!
//! The stream API chains `append` calls; these macros offer the `format!`
//! flavor instead, expanding to a single-fragment statement on the right
//! stream.
//!
//! # Examples
//!
//! ```
//! use micro_logger::prelude::*;
//! use micro_logger::info;
//!
//! let factory = LoggerFactory::new(std::io::stdout());
//! let logger = factory.create("server");
//!
//! // Basic logging
//! info!(logger, "started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message at an explicit severity, with automatic formatting.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let factory = LoggerFactory::new(std::io::sink());
/// # let logger = factory.create("api");
/// use micro_logger::log;
/// log!(logger, Severity::Info, "simple message");
/// log!(logger, Severity::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.stream($severity).append(format!($($arg)+))
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let factory = LoggerFactory::new(std::io::sink());
/// # let logger = factory.create("cache");
/// use micro_logger::debug;
/// debug!(logger, "entry evicted");
/// debug!(logger, "hit ratio: {}", 0.97);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let factory = LoggerFactory::new(std::io::sink());
/// # let logger = factory.create("app");
/// use micro_logger::info;
/// info!(logger, "application started");
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let factory = LoggerFactory::new(std::io::sink());
/// # let logger = factory.create("disk");
/// use micro_logger::warning;
/// warning!(logger, "low disk space");
/// warning!(logger, "retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let factory = LoggerFactory::new(std::io::sink());
/// # let logger = factory.create("db");
/// use micro_logger::error;
/// error!(logger, "failed to connect");
/// error!(logger, "code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
