//! Core types for gigmap-core.
//!
//! This module defines the data structures shared across all pipeline
//! layers: the static [`Region`] record, the untrusted [`RawRow`] as
//! delivered by a feed, the canonical [`Event`] with its [`Location`], and
//! the published [`Snapshot`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate;

/// Synthetic region key under which city counts from every region are merged.
pub const ALL_REGIONS_KEY: &str = "all";

/// One top-level feed source: a metro area with its own feed key and
/// timezone. The region set is fixed configuration loaded once at startup;
/// regions are never discovered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Short feed key, e.g. `"BayArea"`. Appended to the feed base URL.
    pub key: String,
    /// Display name, e.g. `"Northern California"`. Doubles as the fallback
    /// state for events whose venue string embeds no location of its own.
    pub name: String,
    /// IANA timezone identifier, e.g. `"America/Los_Angeles"`. Event
    /// timestamps are wall-clock values in this zone and are never converted.
    pub timezone: String,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}

/// One raw feed record: ten ordered string fields with no validation
/// guarantees. Short rows are padded with empty strings by the feed client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub name: String,
    pub genres: String,
    pub location: String,
    pub time: String,
    pub price: String,
    pub age: String,
    pub organizer: String,
    pub ticket_link: String,
    pub event_link: String,
}

impl RawRow {
    /// Number of columns in the upstream feed schema.
    pub const FIELD_COUNT: usize = 10;
}

/// A venue resolved from a raw location string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Venue free text, e.g. `"The Independent"`.
    pub venue: String,
    /// City as written in the feed; empty when the venue string carries no
    /// parenthesized location.
    pub city: String,
    /// Full state/province name, never an abbreviation. Falls back to the
    /// owning region's display name when the venue string embeds no location;
    /// empty when an embedded abbreviation failed to expand.
    pub state: String,
    /// Gazetteer latitude; `None` when lookup missed.
    pub lat: Option<f64>,
    /// Gazetteer longitude; `None` when lookup missed.
    pub lon: Option<f64>,
}

/// A normalized event, the canonical output of row normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Local wall-clock start, second precision.
    pub timestamp_start: NaiveDateTime,
    /// Local wall-clock end. At or after `timestamp_start` unless the feed
    /// explicitly stated a reversed date range, which is kept verbatim.
    pub timestamp_end: NaiveDateTime,
    /// Event name, may be empty.
    pub name: String,
    /// Trimmed, non-empty genre strings in feed order. Duplicates survive
    /// here; they collapse into counts only at aggregation time.
    pub genres: Vec<String>,
    pub location: Location,
    /// Price free text; `None` when the field was blank.
    pub price: Option<String>,
    /// Normalized minimum admission age: 0 (all ages), 18, or 21.
    pub age_minimum: u8,
    pub organizer: String,
    pub ticket_link: String,
    pub event_link: String,
    /// The owning region's record. Regions are static configuration and
    /// outlive every event.
    pub region: Region,
}

/// The unit of publication: one refresh cycle's complete, immutable output.
///
/// A snapshot is never mutated after it is built; refresh replaces the
/// published snapshot wholesale via [`crate::SnapshotStore::publish`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Region key → that region's events, in feed order.
    pub events_by_region: BTreeMap<String, Vec<Event>>,
    /// Genre → occurrence count, summed across all regions.
    pub genre_counts: BTreeMap<String, u64>,
    /// Region key → (city → count), plus the synthetic [`ALL_REGIONS_KEY`]
    /// table merging every region.
    pub city_counts: BTreeMap<String, BTreeMap<String, u64>>,
    /// When the producing cycle ran.
    pub generated_at: DateTime<Utc>,
}

impl Snapshot {
    /// The snapshot served before the first cycle completes when nothing was
    /// persisted by a previous run.
    pub fn empty() -> Self {
        Self {
            events_by_region: BTreeMap::new(),
            genre_counts: BTreeMap::new(),
            city_counts: BTreeMap::new(),
            generated_at: DateTime::UNIX_EPOCH,
        }
    }

    /// Build a snapshot from per-region event lists, computing the genre and
    /// city tallies.
    pub fn build(
        events_by_region: BTreeMap<String, Vec<Event>>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let genre_counts = aggregate::genre_counts(&events_by_region);
        let city_counts = aggregate::city_counts(&events_by_region);
        Self {
            events_by_region,
            genre_counts,
            city_counts,
            generated_at,
        }
    }
}
