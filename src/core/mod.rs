//! Core emission pipeline types

pub mod factory;
pub mod log_stream;
pub mod logger;
pub mod message_builder;
pub mod observer;
pub mod severity;

pub(crate) mod destination;
pub(crate) mod style;
pub(crate) mod timestamp;

pub use factory::{LoggerFactory, LoggerFactoryBuilder};
pub use log_stream::{LogStream, StreamStats};
pub use logger::Logger;
pub use message_builder::MessageBuilder;
pub use observer::LogObserver;
pub use severity::{ParseSeverityError, Severity};
