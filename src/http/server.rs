//! HTTP server setup and API handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the content API and health endpoint
//! - Wire up middleware (host routing, tracing, request timeout)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - Host routing is the outermost layer: every request is decided before
//!   any handler logic runs
//! - Handlers never fail the page for a remote fetch problem; assembly
//!   degrades to local content
//! - Non-API paths resolve to a plain echo of the internal path; page
//!   rendering lives outside this service

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ContentConfig, SiteConfig};
use crate::content::{assemble, paginate, ArxivClient, ContentCache, ContentError, ContentKind, PrebuiltCache};
use crate::routing::HostRouteLayer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentConfig,
    pub cache: Arc<dyn ContentCache>,
    pub arxiv: ArxivClient,
}

/// HTTP server for the portfolio edge.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, ContentError> {
        let arxiv = ArxivClient::new(
            &config.arxiv,
            Duration::from_secs(config.timeouts.fetch_secs),
        )?;
        let state = AppState {
            content: config.content.clone(),
            cache: Arc::new(PrebuiltCache::new(config.content.prebuilt_dir.clone())),
            arxiv,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &SiteConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/content/{kind}", get(content_handler))
            .route("/healthz", get(healthz))
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(HostRouteLayer::new(config.hosts.clone()))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    #[serde(default = "default_locale")]
    pub locale: String,

    pub section: Option<String>,

    pub page: Option<usize>,
}

/// Content listing handler: `{ items, page, page_size, has_prev, has_next }`.
async fn content_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let Some(kind) = ContentKind::parse(&kind) else {
        return (StatusCode::NOT_FOUND, "Unknown content kind").into_response();
    };

    tracing::debug!(
        kind = kind.as_str(),
        locale = %query.locale,
        section = query.section.as_deref().unwrap_or(""),
        "Listing content"
    );

    let items = assemble::items(
        kind,
        query.section.as_deref(),
        &state.content,
        state.cache.as_ref(),
        &state.arxiv,
    )
    .await;

    let view = paginate(items, query.page.unwrap_or(1), state.content.page_size);
    Json(view).into_response()
}

async fn healthz() -> &'static str {
    "ok"
}

/// Echo the internally resolved path. Page rendering is an external
/// collaborator; this keeps rewrite behavior observable end to end.
async fn page_handler(uri: Uri) -> Response {
    (StatusCode::OK, format!("resolved {}", uri.path())).into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
