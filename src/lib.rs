//! Multi-tenant portfolio edge service.
//!
//! Several branded hostnames share one deployment. Every inbound request
//! gets a single host routing decision (pass, internal rewrite into a
//! tenant subtree, or canonical redirect) before any handler runs, and the
//! content API serves unified listings aggregated from markdown
//! collections, a remote bibliographic feed, and a prebuilt cache.

pub mod config;
pub mod content;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use routing::{route, RoutingDecision};
