//! Scripted fake [`FeedSource`] for integration tests.
//!
//! Each region key is scripted with either a raw CSV body (parsed through
//! the production row splitter) or an outage. Scripts can be rewritten
//! between cycles to simulate an upstream that recovers or degrades.
//!
//! # Example
//!
//! ```rust
//! let feed = FakeFeed::new();
//! feed.serve("BayArea", FEED_BAY_AREA);
//! feed.fail("Seattle");
//! // run a cycle, then let Seattle recover:
//! feed.serve("Seattle", FEED_SEATTLE);
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use gigmap_core::{RawRow, Region};
use gigmap_feeds::{rows, FeedSource, FetchError};

#[derive(Default)]
pub struct FakeFeed {
    scripts: Mutex<HashMap<String, Script>>,
}

#[derive(Clone)]
enum Script {
    Body(String),
    Outage,
}

impl FakeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this CSV body for the region on every subsequent fetch.
    pub fn serve(&self, region_key: &str, body: &str) {
        self.scripts
            .lock()
            .unwrap()
            .insert(region_key.to_string(), Script::Body(body.to_string()));
    }

    /// Fail every subsequent fetch for the region. Unscripted regions fail
    /// too.
    pub fn fail(&self, region_key: &str) {
        self.scripts
            .lock()
            .unwrap()
            .insert(region_key.to_string(), Script::Outage);
    }
}

impl FeedSource for FakeFeed {
    async fn fetch(&self, region: &Region) -> Result<Vec<RawRow>, FetchError> {
        let script = self.scripts.lock().unwrap().get(&region.key).cloned();
        match script {
            Some(Script::Body(body)) => rows::parse(&body).map_err(|source| FetchError::Decode {
                region: region.key.clone(),
                source,
            }),
            // Which FetchError kind does not matter to the scheduler; a
            // scripted outage reads as a region-scoped decode failure.
            Some(Script::Outage) | None => Err(FetchError::Decode {
                region: region.key.clone(),
                source: csv::Error::from(std::io::Error::other("scripted outage")),
            }),
        }
    }
}
