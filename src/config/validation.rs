//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (tenant prefixes unique, not shared paths)
//! - Validate value ranges (timeouts > 0, page size > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use url::Url;

use crate::config::schema::SiteConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "hosts.tenants[0].path_prefix").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.hosts.primary_host.is_empty() {
        errors.push(err("hosts.primary_host", "must not be empty"));
    }

    if !config.hosts.tenants.is_empty() && config.hosts.preview_suffix.is_empty() {
        errors.push(err(
            "hosts.preview_suffix",
            "must be set when tenants are configured",
        ));
    }

    let mut seen_prefixes = Vec::new();
    for (i, tenant) in config.hosts.tenants.iter().enumerate() {
        let field = format!("hosts.tenants[{i}]");
        if tenant.host.is_empty() {
            errors.push(err(&format!("{field}.host"), "must not be empty"));
        }
        if !tenant.path_prefix.starts_with('/') || tenant.path_prefix.len() < 2 {
            errors.push(err(
                &format!("{field}.path_prefix"),
                "must start with '/' and name a subtree",
            ));
        }
        if seen_prefixes.contains(&tenant.path_prefix) {
            errors.push(err(
                &format!("{field}.path_prefix"),
                format!("duplicate subtree {:?}", tenant.path_prefix),
            ));
        }
        if config
            .hosts
            .shared_paths
            .iter()
            .any(|p| tenant.path_prefix.starts_with(p.as_str()))
        {
            errors.push(err(
                &format!("{field}.path_prefix"),
                "tenant subtree must not overlap a shared path",
            ));
        }
        seen_prefixes.push(tenant.path_prefix.clone());
    }

    for (i, path) in config.hosts.shared_paths.iter().enumerate() {
        if !path.starts_with('/') {
            errors.push(err(
                &format!("hosts.shared_paths[{i}]"),
                "must start with '/'",
            ));
        }
    }

    if config.content.page_size == 0 {
        errors.push(err("content.page_size", "must be greater than zero"));
    }

    if Url::parse(&config.arxiv.base_url).is_err() {
        errors.push(err("arxiv.base_url", "must be a valid URL"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(err("timeouts.request_secs", "must be greater than zero"));
    }
    if config.timeouts.fetch_secs == 0 {
        errors.push(err("timeouts.fetch_secs", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TenantConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = SiteConfig::default();
        config.content.page_size = 0;
        config.arxiv.base_url = "not a url".into();
        config.timeouts.fetch_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_duplicate_tenant_prefixes() {
        let mut config = SiteConfig::default();
        config.hosts.tenants.push(TenantConfig {
            host: "studio.harrychang.me".into(),
            dev_alias: None,
            path_prefix: "/lab".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("duplicate")));
    }

    #[test]
    fn rejects_tenant_prefix_overlapping_shared_path() {
        let mut config = SiteConfig::default();
        config.hosts.tenants[0].path_prefix = "/api/lab".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("shared path")));
    }
}
