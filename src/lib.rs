//! # Micro Logger
//!
//! A small, synchronous logging pipeline built around per-statement message
//! builders: a factory holds the formatting and concurrency policy, mints
//! named loggers with one stream per severity, and every `append` chain
//! becomes exactly one formatted, atomically written line.
//!
//! ## Features
//!
//! - **Streamed statements**: `logger.info.append("x = ").append(5)` emits one line
//! - **Formatting fixed up front**: tags, padding, and color are computed at the factory, never per call
//! - **Two-lock emission**: destination writes and observer delivery serialize independently
//! - **Synchronous**: no worker threads, no queues; lines land on the calling thread
//!
//! ## Quick start
//!
//! ```
//! use micro_logger::LoggerFactory;
//!
//! let factory = LoggerFactory::builder(std::io::stdout())
//!     .app_name("Api")
//!     .name_padding(10)
//!     .build();
//!
//! let logger = factory.create("startup");
//! logger.info.append("listening on ").append(8080);
//! logger.warning.append("no TLS configured");
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        LogObserver, LogStream, Logger, LoggerFactory, LoggerFactoryBuilder, MessageBuilder,
        ParseSeverityError, Severity, StreamStats,
    };
}

pub use core::{
    LogObserver, LogStream, Logger, LoggerFactory, LoggerFactoryBuilder, MessageBuilder,
    ParseSeverityError, Severity, StreamStats,
};
