//! Shared assertions for gigmap harnesses, with failure messages that name
//! the violated pipeline invariant.

use gigmap_core::{Event, Snapshot, ALL_REGIONS_KEY};

/// Assert the event is chronologically ordered (start ≤ end).
pub fn assert_chronological(event: &Event) {
    assert!(
        event.timestamp_start <= event.timestamp_end,
        "event {:?} ends before it starts: {} > {}",
        event.name,
        event.timestamp_start,
        event.timestamp_end
    );
}

/// Assert the snapshot's genre table sums to the total number of genre
/// occurrences across every event (aggregation never de-duplicates).
pub fn assert_genre_counts_consistent(snapshot: &Snapshot) {
    let occurrences: u64 = snapshot
        .events_by_region
        .values()
        .flatten()
        .map(|event| event.genres.len() as u64)
        .sum();
    let counted: u64 = snapshot.genre_counts.values().sum();
    assert_eq!(
        occurrences, counted,
        "genre_counts total {counted} != {occurrences} genre occurrences in events"
    );
}

/// Assert the synthetic `"all"` city table is exactly the merge of every
/// per-region table.
pub fn assert_all_cities_is_merge(snapshot: &Snapshot) {
    let all = snapshot
        .city_counts
        .get(ALL_REGIONS_KEY)
        .expect("city_counts must carry the \"all\" table");

    let mut merged = std::collections::BTreeMap::new();
    for (region_key, cities) in &snapshot.city_counts {
        if region_key == ALL_REGIONS_KEY {
            continue;
        }
        for (city, count) in cities {
            *merged.entry(city.clone()).or_insert(0u64) += count;
        }
    }
    assert_eq!(
        *all, merged,
        "\"all\" city table is not the merge of the per-region tables"
    );
}
