//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; no metrics exporter in this deployment
//! - Logging initialized once in main, before any subsystem starts

pub mod logging;

pub use logging::init_logging;
