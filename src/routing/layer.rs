//! Tower middleware applying the routing decision.
//!
//! # Responsibilities
//! - Run `route` once per inbound request, before any handler logic
//! - Apply rewrites in place (client-visible URL unchanged)
//! - Short-circuit redirects without invoking the inner service
//!
//! # Design Decisions
//! - Decision computed from request parts only; never errors
//! - Applied outermost so tracing sees the rewritten path

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::uri::PathAndQuery;
use axum::http::{header, HeaderValue, Request, Response, Uri};
use tower::{Layer, Service};

use crate::config::HostsConfig;
use crate::routing::decision::{route, RoutingDecision};

/// Layer installing [`HostRouteService`] around an inner service.
#[derive(Debug, Clone)]
pub struct HostRouteLayer {
    rules: Arc<HostsConfig>,
}

impl HostRouteLayer {
    pub fn new(rules: HostsConfig) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }
}

impl<S> Layer<S> for HostRouteLayer {
    type Service = HostRouteService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HostRouteService {
            inner,
            rules: self.rules.clone(),
        }
    }
}

/// Middleware resolving the host routing decision per request.
#[derive(Debug, Clone)]
pub struct HostRouteService<S> {
    inner: S,
    rules: Arc<HostsConfig>,
}

impl<S> Service<Request<Body>> for HostRouteService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let decision = {
            let host = req
                .headers()
                .get(header::HOST)
                .and_then(|h| h.to_str().ok());
            route(host, req.uri().path(), req.uri().query(), &self.rules)
        };

        match decision {
            RoutingDecision::Pass => {}
            RoutingDecision::Rewrite { path_and_query } => {
                tracing::debug!(
                    original = %req.uri().path(),
                    rewritten = %path_and_query,
                    "Rewriting request into tenant subtree"
                );
                rewrite_uri(&mut req, &path_and_query);
            }
            RoutingDecision::Redirect { location, status } => {
                tracing::debug!(
                    path = %req.uri().path(),
                    location = %location,
                    status = %status,
                    "Redirecting to canonical location"
                );
                let mut response = Response::new(Body::empty());
                *response.status_mut() = status;
                if let Ok(value) = HeaderValue::try_from(location) {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                return Box::pin(async move { Ok(response) });
            }
        }

        // Swap in the cloned service so the original keeps its readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(req).await })
    }
}

fn rewrite_uri(req: &mut Request<Body>, path_and_query: &str) {
    let pq = match PathAndQuery::try_from(path_and_query) {
        Ok(pq) => pq,
        Err(_) => return,
    };
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(pq);
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }
}
