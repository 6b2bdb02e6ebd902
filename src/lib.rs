//! # comprasgov-harvester
//!
//! Collects paginated registries from the compras.gov.br open-data API and
//! persists them as CSV tables for downstream analysis.
//!
//! Three registries are built in: UASG organizational units, organization
//! registration records, and per-CNPJ procurement-plan line items. All three
//! share one generic pipeline instead of per-endpoint collectors:
//!
//! ```text
//! PaginatingCollector ── (key, page) ──► PageFetcher ── GET ──► API
//!        ▲                                   │
//!        └───────── records of one page ◄────┘ (≤5 attempts, "resultado")
//!        │
//!        └──► record collection ──► CsvTableWriter ──► delimited file
//! ```
//!
//! Collection is strictly sequential: one request at a time, one key at a
//! time, so a single slow remote service is never fanned out against. A page
//! whose retry budget is exhausted ends that key's pagination exactly like an
//! empty page does; the run always completes with whatever was accumulated.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use comprasgov_harvester::collect::PaginatingCollector;
//! use comprasgov_harvester::endpoint;
//! use comprasgov_harvester::fetch::PageFetcher;
//! use comprasgov_harvester::http::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> comprasgov_harvester::Result<()> {
//!     let fetcher = PageFetcher::new(HttpClient::new()?, endpoint::uasg());
//!     let harvest = PaginatingCollector::new(fetcher).collect_all().await;
//!     println!("{} records", harvest.records.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client
pub mod http;

/// Endpoint descriptors and built-in registries
pub mod endpoint;

/// Bounded-retry page fetching
pub mod fetch;

/// Pagination-driving collector
pub mod collect;

/// Key normalization and key-list input
pub mod keys;

/// CSV table output
pub mod output;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
