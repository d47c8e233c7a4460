//! Prebuilt content cache.
//!
//! # Responsibilities
//! - Persist aggregated listings at build time, one JSON file per kind
//! - Serve prebuilt listings at runtime without touching the network
//!
//! # Design Decisions
//! - An empty read is a cache miss, never "confirmed zero items"; callers
//!   fall back to live aggregation
//! - Runtime only reads; writes happen in the prebuild step
//! - A corrupt cache file degrades to a miss with a warning

use std::fs;
use std::path::PathBuf;

use crate::content::error::ContentError;
use crate::content::item::{ContentItem, ContentKind};

/// Capability injected into page assembly for prebuilt listings.
pub trait ContentCache: Send + Sync {
    /// Read the prebuilt listing for a kind. Empty means miss.
    fn read_prebuilt(&self, kind: ContentKind) -> Vec<ContentItem>;

    /// Persist a listing. Build-time only.
    fn write_prebuilt(&self, kind: ContentKind, items: &[ContentItem]) -> Result<(), ContentError>;
}

/// File-backed cache: `<dir>/<kind>.json`.
#[derive(Debug, Clone)]
pub struct PrebuiltCache {
    dir: PathBuf,
}

impl PrebuiltCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, kind: ContentKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.as_str()))
    }
}

impl ContentCache for PrebuiltCache {
    fn read_prebuilt(&self, kind: ContentKind) -> Vec<ContentItem> {
        let path = self.path_for(kind);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Corrupt prebuilt cache, treating as miss");
                Vec::new()
            }
        }
    }

    fn write_prebuilt(&self, kind: ContentKind, items: &[ContentItem]) -> Result<(), ContentError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.path_for(kind), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::SourceKind;

    fn item(title: &str) -> ContentItem {
        ContentItem {
            title: title.into(),
            date: "2024-01-01".into(),
            source: SourceKind::LocalManual,
            authors: vec!["Ada".into()],
            url: None,
            thumbnail: None,
        }
    }

    #[test]
    fn round_trips_a_listing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PrebuiltCache::new(dir.path());

        cache
            .write_prebuilt(ContentKind::Papers, &[item("a"), item("b")])
            .unwrap();

        let read = cache.read_prebuilt(ContentKind::Papers);
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].title, "a");
    }

    #[test]
    fn absent_file_reads_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PrebuiltCache::new(dir.path());

        assert!(cache.read_prebuilt(ContentKind::Gallery).is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("papers.json"), "{ not json").unwrap();
        let cache = PrebuiltCache::new(dir.path());

        assert!(cache.read_prebuilt(ContentKind::Papers).is_empty());
    }

    #[test]
    fn kinds_are_stored_separately() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PrebuiltCache::new(dir.path());

        cache.write_prebuilt(ContentKind::Papers, &[item("p")]).unwrap();
        cache.write_prebuilt(ContentKind::Projects, &[item("j")]).unwrap();

        assert_eq!(cache.read_prebuilt(ContentKind::Papers)[0].title, "p");
        assert_eq!(cache.read_prebuilt(ContentKind::Projects)[0].title, "j");
    }
}
