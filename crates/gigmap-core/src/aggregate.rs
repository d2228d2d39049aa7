//! Frequency aggregation over one cycle's per-region event lists.
//!
//! Pure folds. Genre strings count once per occurrence per event — a genre
//! listed twice on one event counts twice. City keys are taken verbatim from
//! `location.city`; the empty string is a countable key.

use std::collections::BTreeMap;

use crate::types::{Event, ALL_REGIONS_KEY};

/// Genre → occurrence count across every region.
pub fn genre_counts(events_by_region: &BTreeMap<String, Vec<Event>>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for events in events_by_region.values() {
        for event in events {
            for genre in &event.genres {
                *counts.entry(genre.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Region key → (city → count), plus the synthetic [`ALL_REGIONS_KEY`] table
/// merging every region. Built snapshots always carry the `"all"` key, even
/// when no region has events.
pub fn city_counts(
    events_by_region: &BTreeMap<String, Vec<Event>>,
) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut counts: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    let mut all: BTreeMap<String, u64> = BTreeMap::new();

    for (region_key, events) in events_by_region {
        let regional = counts.entry(region_key.clone()).or_default();
        for event in events {
            *regional.entry(event.location.city.clone()).or_insert(0) += 1;
            *all.entry(event.location.city.clone()).or_insert(0) += 1;
        }
    }

    counts.insert(ALL_REGIONS_KEY.to_string(), all);
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, RawRow, Region};
    use crate::{gazetteer::Gazetteer, normalizer};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event(region_key: &str, city: &str, genres: &[&str]) -> Event {
        let region = Region {
            key: region_key.to_string(),
            name: region_key.to_string(),
            timezone: "America/Los_Angeles".to_string(),
        };
        let row = RawRow {
            date: "jun 6".to_string(),
            time: "9pm".to_string(),
            genres: genres.join(", "),
            ..RawRow::default()
        };
        let mut event = normalizer::normalize_row(
            &row,
            &region,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            &Gazetteer::empty(),
        )
        .unwrap();
        event.location = Location {
            venue: String::new(),
            city: city.to_string(),
            state: String::new(),
            lat: None,
            lon: None,
        };
        event
    }

    fn regions(
        lists: &[(&str, Vec<Event>)],
    ) -> BTreeMap<String, Vec<Event>> {
        lists
            .iter()
            .map(|(key, events)| (key.to_string(), events.clone()))
            .collect()
    }

    #[test]
    fn genres_count_per_occurrence() {
        let by_region = regions(&[
            ("a", vec![event("a", "Oakland", &["Techno", "House"])]),
            ("b", vec![event("b", "Seattle", &["Techno", "Techno"])]),
        ]);
        let counts = genre_counts(&by_region);
        assert_eq!(counts["Techno"], 3);
        assert_eq!(counts["House"], 1);
    }

    #[test]
    fn cities_count_into_region_and_all() {
        let by_region = regions(&[
            ("a", vec![event("a", "Oakland", &[]), event("a", "Oakland", &[])]),
            ("b", vec![event("b", "Oakland", &[])]),
        ]);
        let counts = city_counts(&by_region);
        assert_eq!(counts["a"]["Oakland"], 2);
        assert_eq!(counts["b"]["Oakland"], 1);
        assert_eq!(counts[ALL_REGIONS_KEY]["Oakland"], 3);
    }

    #[test]
    fn empty_city_is_a_countable_key() {
        let by_region = regions(&[("a", vec![event("a", "", &[])])]);
        let counts = city_counts(&by_region);
        assert_eq!(counts["a"][""], 1);
        assert_eq!(counts[ALL_REGIONS_KEY][""], 1);
    }

    #[test]
    fn all_table_exists_even_when_empty() {
        let counts = city_counts(&BTreeMap::new());
        assert!(counts.contains_key(ALL_REGIONS_KEY));
        assert!(counts[ALL_REGIONS_KEY].is_empty());
    }
}
