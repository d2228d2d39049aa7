//! Static gazetteer — (city, admin-name) → coordinates.
//!
//! Loaded once at startup from a worldcities-format CSV (simplemaps.com
//! layout: city, lat, lng, country, iso2, iso3, admin_name, …; one header
//! row) and read-only for the lifetime of the process. Matching is
//! case-insensitive exact; when a (city, admin) pair appears more than once
//! in the source, the first row wins.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

pub struct Gazetteer {
    entries: HashMap<(String, String), (f64, f64)>,
}

impl Gazetteer {
    /// Load from a worldcities CSV file. Rows with unparseable coordinates
    /// are skipped with a warning; an unreadable file is an error — the
    /// resolver cannot run without the table.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening gazetteer {}", path.display()))?;

        let mut entries = HashMap::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("gazetteer row {index}"))?;
            let city = record.get(0).unwrap_or("");
            let admin = record.get(6).unwrap_or("");
            let lat = record.get(1).unwrap_or("").parse::<f64>();
            let lon = record.get(2).unwrap_or("").parse::<f64>();
            let (Ok(lat), Ok(lon)) = (lat, lon) else {
                tracing::warn!(row = index, city, "skipping gazetteer row with bad coordinates");
                continue;
            };
            entries
                .entry((city.to_lowercase(), admin.to_lowercase()))
                .or_insert((lat, lon));
        }

        Ok(Self { entries })
    }

    /// Build from in-memory `(city, admin, lat, lon)` tuples. Later
    /// duplicates lose, as in [`Gazetteer::load`].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f64, f64)>,
    {
        let mut map = HashMap::new();
        for (city, admin, lat, lon) in entries {
            map.entry((city.to_lowercase(), admin.to_lowercase()))
                .or_insert((lat, lon));
        }
        Self { entries: map }
    }

    /// A gazetteer with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Case-insensitive exact match on (city, admin name).
    pub fn lookup(&self, city: &str, admin: &str) -> Option<(f64, f64)> {
        self.entries
            .get(&(city.to_lowercase(), admin.to_lowercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
