//! Page fetching
//!
//! One page of one registry at a time, with a bounded retry budget. The
//! fetcher never returns an error: after the last failed attempt the page is
//! simply reported as unavailable, and the collector treats that the same way
//! it treats running out of data. The logs keep the distinction.

mod fetcher;

pub use fetcher::{PageFetcher, MAX_ATTEMPTS};

use crate::types::Record;
use async_trait::async_trait;

/// Result of one bounded-retry fetch for a single `(key, page)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was retrieved; an empty page means end-of-data
    Page(Vec<Record>),
    /// Every attempt failed; the page is treated as absent
    Failed,
}

impl FetchOutcome {
    /// Whether this outcome ends pagination for the current key
    ///
    /// An empty page and a failed page end iteration identically; the return
    /// contract deliberately does not distinguish the two.
    pub fn ends_pagination(&self) -> bool {
        match self {
            Self::Page(records) => records.is_empty(),
            Self::Failed => true,
        }
    }
}

/// A source of registry pages
///
/// The seam between the collector and the HTTP layer. Production code uses
/// [`PageFetcher`]; tests substitute scripted sources.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Registry name, used in logs
    fn name(&self) -> &str;

    /// Fetch one page for an optional key
    ///
    /// `page` is 1-based. The key, when present, must already be normalized.
    async fn fetch_page(&self, key: Option<&str>, page: u32) -> FetchOutcome;
}

#[cfg(test)]
mod tests;
