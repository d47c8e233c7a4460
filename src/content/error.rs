//! Content pipeline error definitions.

use thiserror::Error;

/// Errors that can occur while aggregating content.
///
/// Missing files and malformed entries are absorbed where the pipeline can
/// interpret them as "no content configured"; only genuine external-dependency
/// failures (the remote fetch, cache writes) reach this type.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Outbound request to the bibliographic API failed.
    #[error("remote fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The bibliographic API returned a body we could not parse.
    #[error("feed parse failed: {0}")]
    FeedParse(#[from] quick_xml::DeError),

    /// The configured API base URL is not a valid URL.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Prebuilt cache read/write failed.
    #[error("cache IO failed: {0}")]
    CacheIo(#[from] std::io::Error),

    /// Prebuilt cache entries failed to encode.
    #[error("cache encode failed: {0}")]
    CacheEncode(#[from] serde_json::Error),
}
