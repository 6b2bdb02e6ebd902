//! HTTP client
//!
//! A thin, configured wrapper around `reqwest`. The client performs exactly
//! one attempt per call; the bounded retry loop lives in [`crate::fetch`] so
//! that every attempt can be logged with its key and page number.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
