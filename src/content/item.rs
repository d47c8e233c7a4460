//! Unified content item model.
//!
//! Items from every source (manually-curated markdown, remote bibliographic
//! API) normalize into [`ContentItem`] before merging, so downstream sorting
//! and pagination never care where an item came from.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Where a content item was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    LocalManual,
    RemoteApi,
}

/// One listing entry. Immutable once constructed; discarded after the
/// response is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,

    /// ISO-8601 date string as found in the source. Kept raw for display;
    /// parsed on demand for sorting.
    pub date: String,

    pub source: SourceKind,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ContentItem {
    /// Epoch millis for descending sort. Unparseable dates sort as oldest.
    pub fn sort_key(&self) -> i64 {
        parse_date_millis(&self.date).unwrap_or(i64::MIN)
    }
}

fn parse_date_millis(date: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

/// The content collections the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Papers,
    Projects,
    Gallery,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Papers,
        ContentKind::Projects,
        ContentKind::Gallery,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "papers" => Some(Self::Papers),
            "projects" => Some(Self::Projects),
            "gallery" => Some(Self::Gallery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Papers => "papers",
            Self::Projects => "projects",
            Self::Gallery => "gallery",
        }
    }
}

/// Accept either a single value or a list, normalizing to a list.
///
/// Source documents are hand-written: an entry with one author frequently
/// carries a bare string where multi-author entries carry a sequence. Both
/// shapes deserialize to `Vec<String>` through this one helper.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
