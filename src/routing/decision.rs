//! Host routing decision logic.
//!
//! # Responsibilities
//! - Decide pass / rewrite / redirect for every inbound request
//! - Match hostnames case-insensitively, ignoring any :port suffix
//! - Keep shared paths (API, assets, well-known files) on every host
//!
//! # Design Decisions
//! - Pure function of (hostname, path, query, rules): no ambient state reads
//! - Total: missing or malformed hostname defaults to the primary host
//! - First match wins, evaluated top-to-bottom (preview, apex, tenants)
//! - No regex: suffix and prefix matching only

use axum::http::StatusCode;

use crate::config::HostsConfig;

/// Outcome of routing one request. Exactly one decision per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request from the default path space, unchanged.
    Pass,

    /// Serve a different internal path; the client-visible URL is unchanged.
    Rewrite {
        /// New path with the original query string preserved.
        path_and_query: String,
    },

    /// Send the client elsewhere with an explicit redirect.
    Redirect {
        location: String,
        status: StatusCode,
    },
}

/// Decide how to serve a request for the given hostname and path.
///
/// Precedence, first match wins:
/// 1. Preview deploys pass through untouched (direct testing of any subtree).
/// 2. The apex domain redirects permanently to its canonical www form.
/// 3. A tenant hostname outside its subtree and outside the shared paths is
///    rewritten into the tenant subtree.
/// 4. A non-tenant hostname requesting a tenant subtree is redirected to the
///    site root; tenant-only routes are unreachable from the default host.
/// 5. Everything else passes through.
pub fn route(
    hostname: Option<&str>,
    path: &str,
    query: Option<&str>,
    rules: &HostsConfig,
) -> RoutingDecision {
    let host = match hostname.map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => h,
        None => rules.primary_host.as_str(),
    };
    // Host headers may carry a port; matching ignores it.
    let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();

    if !rules.preview_suffix.is_empty() && host.ends_with(rules.preview_suffix.as_str()) {
        return RoutingDecision::Pass;
    }

    if host == rules.apex_host.to_ascii_lowercase() {
        return RoutingDecision::Redirect {
            location: format!(
                "https://{}{}{}",
                rules.canonical_host,
                path,
                format_query(query)
            ),
            status: StatusCode::PERMANENT_REDIRECT,
        };
    }

    for tenant in &rules.tenants {
        let is_tenant_host = host == tenant.host.to_ascii_lowercase()
            || tenant
                .dev_alias
                .as_deref()
                .is_some_and(|alias| host == alias.to_ascii_lowercase());
        let in_subtree = path == tenant.path_prefix
            || path.starts_with(&format!("{}/", tenant.path_prefix));

        if is_tenant_host {
            if in_subtree || is_shared_path(path, &rules.shared_paths) {
                return RoutingDecision::Pass;
            }
            return RoutingDecision::Rewrite {
                path_and_query: format!("{}{}{}", tenant.path_prefix, path, format_query(query)),
            };
        }

        if in_subtree {
            return RoutingDecision::Redirect {
                location: "/".to_string(),
                status: StatusCode::TEMPORARY_REDIRECT,
            };
        }
    }

    RoutingDecision::Pass
}

fn is_shared_path(path: &str, shared: &[String]) -> bool {
    shared.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

fn format_query(query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("?{q}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> HostsConfig {
        HostsConfig::default()
    }

    #[test]
    fn preview_hosts_always_pass() {
        let rules = rules();
        for path in ["/", "/lab/foo", "/anything", "/api/content/papers"] {
            assert_eq!(
                route(Some("portfolio-git-main.vercel.app"), path, None, &rules),
                RoutingDecision::Pass
            );
        }
    }

    #[test]
    fn apex_redirects_to_canonical_www() {
        let decision = route(Some("harrychang.me"), "/anything", None, &rules());
        assert_eq!(
            decision,
            RoutingDecision::Redirect {
                location: "https://www.harrychang.me/anything".into(),
                status: StatusCode::PERMANENT_REDIRECT,
            }
        );
    }

    #[test]
    fn apex_redirect_preserves_query() {
        let decision = route(Some("harrychang.me"), "/p", Some("page=2"), &rules());
        match decision {
            RoutingDecision::Redirect { location, .. } => {
                assert_eq!(location, "https://www.harrychang.me/p?page=2")
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn tenant_host_rewrites_into_subtree() {
        let decision = route(Some("lab.harrychang.me"), "/foo", None, &rules());
        assert_eq!(
            decision,
            RoutingDecision::Rewrite {
                path_and_query: "/lab/foo".into()
            }
        );
    }

    #[test]
    fn tenant_rewrite_preserves_query() {
        let decision = route(Some("lab.harrychang.me"), "/foo", Some("a=1&b=2"), &rules());
        assert_eq!(
            decision,
            RoutingDecision::Rewrite {
                path_and_query: "/lab/foo?a=1&b=2".into()
            }
        );
    }

    #[test]
    fn tenant_host_passes_paths_already_in_subtree() {
        let rules = rules();
        assert_eq!(
            route(Some("lab.harrychang.me"), "/lab/foo", None, &rules),
            RoutingDecision::Pass
        );
        assert_eq!(
            route(Some("lab.harrychang.me"), "/lab", None, &rules),
            RoutingDecision::Pass
        );
    }

    #[test]
    fn tenant_host_passes_shared_paths() {
        let rules = rules();
        for path in ["/api/content/papers", "/favicon.ico", "/.well-known/acme"] {
            assert_eq!(
                route(Some("lab.harrychang.me"), path, None, &rules),
                RoutingDecision::Pass
            );
        }
    }

    #[test]
    fn dev_alias_rewrites_like_production_host() {
        let decision = route(Some("lab.localhost:3000"), "/foo", None, &rules());
        assert_eq!(
            decision,
            RoutingDecision::Rewrite {
                path_and_query: "/lab/foo".into()
            }
        );
    }

    #[test]
    fn subtree_is_unreachable_from_default_host() {
        let decision = route(Some("www.harrychang.me"), "/lab/foo", None, &rules());
        assert_eq!(
            decision,
            RoutingDecision::Redirect {
                location: "/".into(),
                status: StatusCode::TEMPORARY_REDIRECT,
            }
        );
    }

    #[test]
    fn subtree_prefix_match_requires_segment_boundary() {
        // "/laboratory" is not inside "/lab".
        assert_eq!(
            route(Some("www.harrychang.me"), "/laboratory", None, &rules()),
            RoutingDecision::Pass
        );
    }

    #[test]
    fn missing_hostname_defaults_to_primary_host() {
        let rules = rules();
        assert_eq!(route(None, "/foo", None, &rules), RoutingDecision::Pass);
        assert_eq!(route(Some(""), "/foo", None, &rules), RoutingDecision::Pass);
        // The default is the canonical host, so tenant subtrees stay sealed.
        assert_eq!(
            route(None, "/lab/foo", None, &rules),
            RoutingDecision::Redirect {
                location: "/".into(),
                status: StatusCode::TEMPORARY_REDIRECT,
            }
        );
    }

    #[test]
    fn host_matching_is_case_insensitive() {
        let decision = route(Some("LAB.HarryChang.ME"), "/foo", None, &rules());
        assert_eq!(
            decision,
            RoutingDecision::Rewrite {
                path_and_query: "/lab/foo".into()
            }
        );
    }
}
