//! Content aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! manual.rs (front-matter markdown)  ─┐
//! identifiers.rs → arxiv.rs (remote) ─┤→ item.rs (unified shape)
//! cache.rs (prebuilt JSON)           ─┘
//!     → assemble.rs (cache-first, fan-out/fan-in, degrade on failure)
//!     → aggregate.rs (merge, stable sort, paginate)
//! ```
//!
//! # Design Decisions
//! - Every source normalizes to ContentItem before any merging
//! - Missing sources are empty contributions, silently
//! - Only the remote fetch may fail; callers choose the fallback

pub mod aggregate;
pub mod arxiv;
pub mod assemble;
pub mod cache;
pub mod error;
pub mod identifiers;
pub mod item;
pub mod manual;

pub use aggregate::{merge_and_sort, paginate, PaginatedView};
pub use arxiv::ArxivClient;
pub use cache::{ContentCache, PrebuiltCache};
pub use error::ContentError;
pub use item::{ContentItem, ContentKind, SourceKind};
