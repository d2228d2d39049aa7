//! Refresh scheduler — drives fetch → normalize → aggregate → publish.
//!
//! One cycle never fails as a whole: a region whose fetch fails keeps its
//! previously published events, a row that cannot be parsed is dropped, and
//! a snapshot that cannot be persisted is still published. Region fetches
//! within a cycle are independent and run concurrently.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use gigmap_core::config::Config;
use gigmap_core::gazetteer::Gazetteer;
use gigmap_core::normalizer;
use gigmap_core::{Event, RawRow, Region, Snapshot, SnapshotStore};
use gigmap_feeds::FeedSource;

/// Run refresh cycles forever: an initial warm-up delay, then one cycle per
/// configured interval.
pub async fn run<F: FeedSource>(
    config: Config,
    feeds: F,
    gazetteer: Arc<Gazetteer>,
    store: Arc<SnapshotStore>,
) {
    tokio::time::sleep(Duration::from_secs(config.feed.startup_delay_secs)).await;
    loop {
        run_cycle(&config, &feeds, &gazetteer, &store).await;
        tokio::time::sleep(Duration::from_secs(config.feed.refresh_interval_secs)).await;
    }
}

/// One complete cycle: fetch every region concurrently, normalize and
/// resolve per row, fall back to the previous snapshot for regions whose
/// fetch failed, aggregate, persist best-effort, publish atomically.
pub async fn run_cycle<F: FeedSource>(
    config: &Config,
    feeds: &F,
    gazetteer: &Gazetteer,
    store: &SnapshotStore,
) {
    let started = std::time::Instant::now();
    let previous = store.current();
    let today = Utc::now().date_naive();

    tracing::info!(regions = config.regions.len(), "refresh cycle started");

    let fetches = join_all(
        config
            .regions
            .iter()
            .map(|region| async move { (region, feeds.fetch(region).await) }),
    )
    .await;

    let mut events_by_region = BTreeMap::new();
    for (region, fetched) in fetches {
        let events = match fetched {
            Ok(rows) => normalize_rows(&rows, region, today, gazetteer),
            Err(err) => {
                tracing::warn!(region = %region.key, %err, "fetch failed; keeping previous events");
                previous
                    .events_by_region
                    .get(&region.key)
                    .cloned()
                    .unwrap_or_default()
            }
        };
        events_by_region.insert(region.key.clone(), events);
    }

    let snapshot = Snapshot::build(events_by_region, Utc::now());

    if let Err(err) = snapshot.save(&config.data.snapshot_path) {
        tracing::warn!(
            %err,
            path = %config.data.snapshot_path.display(),
            "snapshot not persisted"
        );
    }

    let events: usize = snapshot.events_by_region.values().map(Vec::len).sum();
    store.publish(snapshot);
    tracing::info!(
        events,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "refresh cycle published"
    );
}

/// Normalize one region's rows, dropping those that fail to parse.
fn normalize_rows(
    rows: &[RawRow],
    region: &Region,
    today: NaiveDate,
    gazetteer: &Gazetteer,
) -> Vec<Event> {
    rows.iter()
        .filter_map(|row| match normalizer::normalize_row(row, region, today, gazetteer) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(
                    region = %region.key,
                    %err,
                    date = %row.date,
                    name = %row.name,
                    "dropping unparseable row"
                );
                None
            }
        })
        .collect()
}
