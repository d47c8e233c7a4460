//! Manually-curated markdown collections.
//!
//! # Responsibilities
//! - Enumerate `*.md` files in a collection directory
//! - Extract the YAML front-matter block from each file
//! - Map front-matter fields onto the unified item shape
//!
//! # Design Decisions
//! - A missing directory is a valid "no manual items configured" state,
//!   never an error
//! - A file with malformed front-matter is skipped with a warning; one bad
//!   entry must not take down the listing
//! - Body text is not part of the item shape and is never kept

use std::fs;
use std::path::Path;

use glob::glob;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::item::{one_or_many, ContentItem, SourceKind};

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,

    #[serde(default, deserialize_with = "one_or_many")]
    authors: Vec<String>,

    #[serde(default)]
    date: String,

    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    thumbnail: Option<String>,
}

impl From<FrontMatter> for ContentItem {
    fn from(fm: FrontMatter) -> Self {
        ContentItem {
            title: fm.title,
            date: fm.date,
            source: SourceKind::LocalManual,
            authors: fm.authors,
            url: fm.url,
            thumbnail: fm.thumbnail,
        }
    }
}

/// Load every manual item in a collection directory.
pub fn load(dir: &Path) -> Vec<ContentItem> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let pattern = format!("{}/*.md", dir.display());
    let paths = match glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Invalid collection pattern");
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for entry in paths.flatten() {
        let raw = match fs::read_to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(file = %entry.display(), error = %e, "Unreadable collection file");
                continue;
            }
        };
        match parse_front_matter::<FrontMatter>(&raw) {
            Ok(fm) => items.push(fm.into()),
            Err(e) => {
                tracing::warn!(file = %entry.display(), error = %e, "Skipping malformed front-matter");
            }
        }
    }
    items
}

/// Extract and deserialize the YAML front-matter block of a markdown document.
///
/// Only the metadata block is consumed; the markdown body is walked but
/// discarded.
pub fn parse_front_matter<T>(raw: &str) -> Result<T, serde_yaml::Error>
where
    T: DeserializeOwned,
{
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut front_matter = String::new();
    let mut in_front_matter = false;

    for event in Parser::new_ext(raw, options) {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => in_front_matter = true,
            Event::End(TagEnd::MetadataBlock(_)) => break,
            Event::Text(ref text) if in_front_matter => front_matter.push_str(text),
            _ => {}
        }
    }

    serde_yaml::from_str(&front_matter)
}
