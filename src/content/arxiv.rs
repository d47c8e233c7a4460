//! Remote bibliographic API client.
//!
//! # Responsibilities
//! - Batch all requested identifiers into one query
//! - Parse the Atom response into unified content items
//! - Bound request latency with a client-side timeout
//!
//! # Design Decisions
//! - Empty identifier list short-circuits without any network I/O
//! - Single attempt, no retry: the caller decides how to degrade
//! - An absent feed/entry structure is an empty result, not an error
//! - Repeated XML elements (entries, authors) deserialize into Vec whether
//!   the document carries one or many

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::ArxivConfig;
use crate::content::error::ContentError;
use crate::content::item::{ContentItem, SourceKind};

/// Client for the remote bibliographic query endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ArxivClient {
    pub fn new(config: &ArxivConfig, timeout: Duration) -> Result<Self, ContentError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch the given identifiers in one batched request.
    pub async fn fetch(&self, ids: &[String]) -> Result<Vec<ContentItem>, ContentError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("id_list", &ids.join(","))
            .append_pair("max_results", &ids.len().to_string());

        tracing::debug!(count = ids.len(), "Fetching remote bibliographic entries");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_feed(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    title: String,

    #[serde(default)]
    author: Vec<Author>,

    #[serde(default)]
    published: String,

    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: String,
}

/// Parse an Atom feed body into content items.
pub fn parse_feed(xml: &str) -> Result<Vec<ContentItem>, ContentError> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    Ok(feed.entry.into_iter().map(ContentItem::from).collect())
}

impl From<Entry> for ContentItem {
    fn from(entry: Entry) -> Self {
        ContentItem {
            title: clean_title(&entry.title),
            date: entry.published,
            source: SourceKind::RemoteApi,
            authors: entry.author.into_iter().map(|a| a.name).collect(),
            url: (!entry.id.is_empty()).then_some(entry.id),
            thumbnail: None,
        }
    }
}

/// Feed titles carry literal `\n` escape sequences and hard-wrapped
/// whitespace; collapse both and trim.
fn clean_title(raw: &str) -> String {
    raw.replace("\\n", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_identifier_list_skips_the_network() {
        // An unroutable base URL: any attempted request would error out.
        let config = ArxivConfig {
            base_url: "http://127.0.0.1:9/api/query".into(),
        };
        let client = ArxivClient::new(&config, Duration::from_millis(50)).unwrap();

        let items = client.fetch(&[]).await.unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn single_entry_and_single_author_normalize_to_lists() {
        let xml = r#"
            <feed xmlns="http://www.w3.org/2005/Atom">
              <entry>
                <id>http://arxiv.org/abs/2401.12345v1</id>
                <title>One Paper</title>
                <published>2024-01-15T00:00:00Z</published>
                <author><name>Ada Lovelace</name></author>
              </entry>
            </feed>"#;

        let items = parse_feed(xml).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].authors, vec!["Ada Lovelace"]);
        assert_eq!(items[0].url.as_deref(), Some("http://arxiv.org/abs/2401.12345v1"));
        assert_eq!(items[0].source, SourceKind::RemoteApi);
    }

    #[test]
    fn multiple_entries_and_authors_parse_in_order() {
        let xml = r#"
            <feed>
              <entry>
                <id>http://arxiv.org/abs/2401.00001v1</id>
                <title>First</title>
                <published>2024-01-01T00:00:00Z</published>
                <author><name>Ada</name></author>
                <author><name>Grace</name></author>
              </entry>
              <entry>
                <id>http://arxiv.org/abs/2402.00002v1</id>
                <title>Second</title>
                <published>2024-02-01T00:00:00Z</published>
                <author><name>Edsger</name></author>
              </entry>
            </feed>"#;

        let items = parse_feed(xml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].authors, vec!["Ada", "Grace"]);
        assert_eq!(items[1].authors, vec!["Edsger"]);
    }

    #[test]
    fn feed_without_entries_is_empty_not_an_error() {
        let items = parse_feed("<feed></feed>").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn titles_lose_escape_artifacts_and_extra_whitespace() {
        let xml = r#"
            <feed>
              <entry>
                <title>  Attention\n  Is All   You Need </title>
                <published>2017-06-12T00:00:00Z</published>
              </entry>
            </feed>"#;

        let items = parse_feed(xml).unwrap();
        assert_eq!(items[0].title, "Attention Is All You Need");
    }

    #[test]
    fn garbage_body_surfaces_a_parse_error() {
        assert!(parse_feed("not xml at all").is_err());
    }
}
