//! Page-level content assembly.
//!
//! # Data Flow
//! ```text
//! request (kind, section)
//!     → prebuilt cache read (miss when empty)
//!     → live aggregation:
//!         manual directory load  ─┐  (fan-out, independent sources)
//!         identifier doc → fetch ─┘
//!     → merge_and_sort
//! ```
//!
//! # Design Decisions
//! - Cache-first at runtime; an empty cache read is a miss, not zero items
//! - Remote fetch failure degrades to local content at runtime, but fails
//!   the prebuild step loudly
//! - Section requests bypass the cache (prebuilt listings are unsectioned)

use std::path::{Path, PathBuf};

use crate::config::ContentConfig;
use crate::content::aggregate::merge_and_sort;
use crate::content::arxiv::ArxivClient;
use crate::content::cache::ContentCache;
use crate::content::error::ContentError;
use crate::content::item::{ContentItem, ContentKind};
use crate::content::{identifiers, manual};

/// Produce the full sorted listing for a content kind at request time.
///
/// A listing must always come back, possibly empty; failures degrade to
/// whatever local content is available.
pub async fn items(
    kind: ContentKind,
    section: Option<&str>,
    content: &ContentConfig,
    cache: &dyn ContentCache,
    arxiv: &ArxivClient,
) -> Vec<ContentItem> {
    if section.is_none() {
        let cached = cache.read_prebuilt(kind);
        if !cached.is_empty() {
            tracing::debug!(kind = kind.as_str(), count = cached.len(), "Serving prebuilt listing");
            return cached;
        }
    }

    match kind {
        ContentKind::Papers => {
            let (manual_items, remote) = fetch_papers(section, content, arxiv).await;
            let remote = remote.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Remote fetch failed, serving local papers only");
                Vec::new()
            });
            merge_and_sort(vec![manual_items, remote])
        }
        _ => merge_and_sort(vec![
            load_local(collection_dir(content, kind, section)).await,
        ]),
    }
}

/// Aggregate every kind once and persist the prebuilt caches.
///
/// Unlike the runtime path, a remote failure here is an error: a build must
/// not silently publish an empty papers cache.
pub async fn prebuild(
    content: &ContentConfig,
    cache: &dyn ContentCache,
    arxiv: &ArxivClient,
) -> Result<(), ContentError> {
    for kind in ContentKind::ALL {
        let items = match kind {
            ContentKind::Papers => {
                let (manual_items, remote) = fetch_papers(None, content, arxiv).await;
                merge_and_sort(vec![manual_items, remote?])
            }
            _ => merge_and_sort(vec![load_local(collection_dir(content, kind, None)).await]),
        };
        cache.write_prebuilt(kind, &items)?;
        tracing::info!(kind = kind.as_str(), count = items.len(), "Prebuilt listing written");
    }
    Ok(())
}

/// Fan out the two independent paper sources and await both.
///
/// The remote result stays a `Result` so each caller decides its own
/// fallback policy.
async fn fetch_papers(
    section: Option<&str>,
    content: &ContentConfig,
    arxiv: &ArxivClient,
) -> (Vec<ContentItem>, Result<Vec<ContentItem>, ContentError>) {
    let manual_dir = collection_dir(content, ContentKind::Papers, section);
    let manual_task = tokio::task::spawn_blocking(move || manual::load(&manual_dir));
    let ids = identifiers::extract(Path::new(&content.papers_doc));

    let (manual_items, remote) = tokio::join!(manual_task, arxiv.fetch(&ids));
    (manual_items.unwrap_or_default(), remote)
}

async fn load_local(dir: PathBuf) -> Vec<ContentItem> {
    tokio::task::spawn_blocking(move || manual::load(&dir))
        .await
        .unwrap_or_default()
}

fn collection_dir(content: &ContentConfig, kind: ContentKind, section: Option<&str>) -> PathBuf {
    let base = match kind {
        ContentKind::Papers => &content.papers_dir,
        ContentKind::Projects => &content.projects_dir,
        ContentKind::Gallery => &content.gallery_dir,
    };
    let mut dir = PathBuf::from(base);
    if let Some(section) = section.filter(|s| is_valid_section(s)) {
        dir.push(section);
    }
    dir
}

/// Sections name a single subdirectory; anything path-like is ignored.
fn is_valid_section(section: &str) -> bool {
    !section.is_empty()
        && section
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
