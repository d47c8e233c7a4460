//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → routing layer (pass / rewrite / redirect, applied outermost)
//!     → server.rs (Axum handlers: content API, health, page echo)
//!     → content assembly (cache-first aggregation)
//!     → JSON response
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
