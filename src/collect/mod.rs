//! Paginating collector
//!
//! Drives a [`PageSource`] across an unbounded page sequence (and optionally
//! across an outer sequence of keys), concatenating every non-empty page into
//! one ordered record collection.

use crate::fetch::{FetchOutcome, PageSource};
use crate::types::Record;
use serde::Serialize;
use tracing::{debug, info};

/// Counters accumulated over one collection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectStats {
    /// Fetch calls issued, including the terminal empty/failed page per key
    pub pages_requested: u64,
    /// Records appended to the collection
    pub records_collected: u64,
    /// Keys iterated (zero for key-less runs)
    pub keys_processed: u64,
}

/// The outcome of one collection run
#[derive(Debug, Clone)]
pub struct Harvest {
    /// All records, in key-iteration order then page order within each key
    pub records: Vec<Record>,
    /// Run counters
    pub stats: CollectStats,
}

/// Walks pages of a [`PageSource`] until end-of-data, accumulating records
///
/// Pagination for a key stops on the first empty page or on a page whose
/// retry budget was exhausted; the two are indistinguishable here by design.
/// Fetch failures never abort the run — a key that errors out contributes
/// fewer (or zero) records, and the run always completes with whatever was
/// accumulated.
///
/// There is no maximum-page safety cap: a source that keeps returning
/// non-empty pages is iterated forever. Known limitation, left uncorrected.
///
/// A collector is good for exactly one run; both entry points consume it.
pub struct PaginatingCollector<S: PageSource> {
    source: S,
    records: Vec<Record>,
    stats: CollectStats,
}

impl<S: PageSource> PaginatingCollector<S> {
    /// Create a collector over a page source, with an empty collection
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: Vec::new(),
            stats: CollectStats::default(),
        }
    }

    /// Collect every page of a key-less registry
    pub async fn collect_all(mut self) -> Harvest {
        info!(registry = self.source.name(), "starting collection");
        self.drain_key(None).await;
        self.finish()
    }

    /// Collect every page for each key, in the given order
    ///
    /// Keys must already be normalized. A key that yields nothing does not
    /// halt iteration over the remaining keys. Duplicate keys are fetched
    /// again, and their records appended again.
    pub async fn collect_for_keys(mut self, keys: &[String]) -> Harvest {
        let total = keys.len();
        info!(
            registry = self.source.name(),
            keys = total,
            "starting key-scoped collection"
        );

        for (index, key) in keys.iter().enumerate() {
            debug!(
                registry = self.source.name(),
                key = key.as_str(),
                position = index + 1,
                total,
                "processing key"
            );
            self.drain_key(Some(key.as_str())).await;
            self.stats.keys_processed += 1;
        }

        self.finish()
    }

    /// Page loop for one key (or the single implicit key)
    async fn drain_key(&mut self, key: Option<&str>) {
        let mut page = 1u32;
        loop {
            let outcome = self.source.fetch_page(key, page).await;
            self.stats.pages_requested += 1;

            match outcome {
                FetchOutcome::Page(records) if !records.is_empty() => {
                    self.stats.records_collected += records.len() as u64;
                    self.records.extend(records);
                    page += 1;
                }
                // Empty page and exhausted retries end this key identically.
                FetchOutcome::Page(_) | FetchOutcome::Failed => {
                    debug!(
                        registry = self.source.name(),
                        key = key.unwrap_or("-"),
                        page,
                        "no more data for this key"
                    );
                    break;
                }
            }
        }
    }

    fn finish(self) -> Harvest {
        info!(
            registry = self.source.name(),
            pages = self.stats.pages_requested,
            records = self.stats.records_collected,
            keys = self.stats.keys_processed,
            "collection finished"
        );
        Harvest {
            records: self.records,
            stats: self.stats,
        }
    }
}
