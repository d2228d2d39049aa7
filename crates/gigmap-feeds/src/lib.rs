//! gigmap-feeds — upstream feed adapters for gigmap.
//!
//! A feed source fetches one region's raw CSV listing and splits it into
//! [`gigmap_core::RawRow`]s. Transport and decode failures stay scoped to
//! the region that caused them: the scheduler keeps that region's previously
//! published events and carries on with the rest of the cycle.

use std::future::Future;

use gigmap_core::{RawRow, Region};
use thiserror::Error;

pub mod http;
pub mod rows;

pub use http::HttpFeedClient;

/// One region's feed failed to fetch or decode this cycle. The next
/// scheduled cycle is the retry mechanism; there is none within a cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed request for region {region} failed: {source}")]
    Transport {
        region: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("feed for region {region} is not parseable CSV: {source}")]
    Decode {
        region: String,
        #[source]
        source: csv::Error,
    },
}

/// A source of raw feed rows, one region at a time.
///
/// The production implementation is [`HttpFeedClient`]; tests substitute
/// scripted fakes.
pub trait FeedSource: Send + Sync {
    /// Fetch one region's feed and split it into rows.
    fn fetch(
        &self,
        region: &Region,
    ) -> impl Future<Output = Result<Vec<RawRow>, FetchError>> + Send;
}
