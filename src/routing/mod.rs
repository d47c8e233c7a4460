//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host, path, query)
//!     → decision.rs (pure pass / rewrite / redirect decision)
//!     → layer.rs (apply: forward, mutate URI, or short-circuit redirect)
//!
//! Rules are built once from HostsConfig at startup and shared via Arc.
//! ```
//!
//! # Design Decisions
//! - Decision logic is a pure function, tested without any HTTP machinery
//! - First match wins (preview, apex, tenants, fallthrough)
//! - Rewrites are internal: the client-visible URL never changes

pub mod decision;
pub mod layer;

pub use decision::{route, RoutingDecision};
pub use layer::HostRouteLayer;
