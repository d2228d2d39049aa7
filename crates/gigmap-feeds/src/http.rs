//! HTTP feed client — one GET per region against the upstream CSV endpoint.

use std::time::Duration;

use gigmap_core::{RawRow, Region};

use crate::{rows, FeedSource, FetchError};

/// Fetches `<base_url><region key>.csv` with a per-request timeout. A
/// timeout behaves exactly like any other transport failure: the region is
/// skipped for this cycle and retried on the next one.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFeedClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn feed_url(&self, region: &Region) -> String {
        format!("{}{}.csv", self.base_url, region.key)
    }
}

impl FeedSource for HttpFeedClient {
    async fn fetch(&self, region: &Region) -> Result<Vec<RawRow>, FetchError> {
        let url = self.feed_url(region);
        tracing::debug!(region = %region.key, url, "fetching feed");

        let transport = |source| FetchError::Transport {
            region: region.key.clone(),
            source,
        };
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;

        rows::parse(&body).map_err(|source| FetchError::Decode {
            region: region.key.clone(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
