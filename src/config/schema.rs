//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the edge
//! service. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the portfolio edge service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Hostname topology: apex/www pairs, tenants, preview deploys.
    pub hosts: HostsConfig,

    /// Content source locations and pagination defaults.
    pub content: ContentConfig,

    /// Remote bibliographic API settings.
    pub arxiv: ArxivConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Hostname topology for the multi-tenant deployment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Canonical host assumed when the Host header is missing or empty.
    pub primary_host: String,

    /// Bare/apex domain that redirects to its canonical "www" form.
    pub apex_host: String,

    /// Canonical host the apex redirects to.
    pub canonical_host: String,

    /// Hostname suffix identifying preview/staging deploys. Requests to
    /// preview hosts bypass all tenant rewriting.
    pub preview_suffix: String,

    /// Tenant subdomains served from a reserved path subtree.
    pub tenants: Vec<TenantConfig>,

    /// Path prefixes served identically on every host (API routes, static
    /// assets, well-known verification files, shared icons).
    pub shared_paths: Vec<String>,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            primary_host: "www.harrychang.me".to_string(),
            apex_host: "harrychang.me".to_string(),
            canonical_host: "www.harrychang.me".to_string(),
            preview_suffix: ".vercel.app".to_string(),
            tenants: vec![TenantConfig::default()],
            shared_paths: vec![
                "/api".to_string(),
                "/healthz".to_string(),
                "/_static".to_string(),
                "/.well-known".to_string(),
                "/favicon.ico".to_string(),
                "/icons".to_string(),
            ],
        }
    }
}

/// One branded subdomain sharing the deployed codebase.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenantConfig {
    /// Production hostname for the tenant (e.g., "lab.harrychang.me").
    pub host: String,

    /// Local-development alias (e.g., "lab.localhost").
    #[serde(default)]
    pub dev_alias: Option<String>,

    /// Reserved path subtree the tenant's pages live under (e.g., "/lab").
    pub path_prefix: String,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            host: "lab.harrychang.me".to_string(),
            dev_alias: Some("lab.localhost".to_string()),
            path_prefix: "/lab".to_string(),
        }
    }
}

/// Content source locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory of manually-curated paper entries (front-matter markdown).
    pub papers_dir: String,

    /// Markdown document listing bibliographic identifiers, one per line.
    pub papers_doc: String,

    /// Directory of project entries.
    pub projects_dir: String,

    /// Directory of gallery entries.
    pub gallery_dir: String,

    /// Directory holding prebuilt JSON caches, one file per content kind.
    pub prebuilt_dir: String,

    /// Default page size for paginated listings.
    pub page_size: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            papers_dir: "content/papers".to_string(),
            papers_doc: "content/papers.md".to_string(),
            projects_dir: "content/projects".to_string(),
            gallery_dir: "content/gallery".to_string(),
            prebuilt_dir: "content/.prebuilt".to_string(),
            page_size: 15,
        }
    }
}

/// Remote bibliographic API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// Query endpoint base URL.
    pub base_url: String,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: "http://export.arxiv.org/api/query".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall inbound request timeout.
    pub request_secs: u64,

    /// Timeout around the outbound bibliographic fetch. The upstream API
    /// has no contractual SLA, so this bounds page latency.
    pub fetch_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            fetch_secs: 10,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter when RUST_LOG is not set.
    pub log_level: String,

    /// Emit JSON-formatted logs (production) instead of pretty (development).
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "portfolio_edge=debug,tower_http=debug".to_string(),
            log_json: false,
        }
    }
}
