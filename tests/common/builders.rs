//! Test builders — ergonomic constructors for `RawRow`, `Region`, the
//! gazetteer, and configs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use std::path::PathBuf;

use gigmap_core::config::Config;
use gigmap_core::gazetteer::Gazetteer;
use gigmap_core::{RawRow, Region};

// ---------------------------------------------------------------------------
// RawRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRow`] test fixtures.
///
/// # Example
///
/// ```rust
/// let row = RawRowBuilder::new("Jun 6", "9pm-2am")
///     .name("Warehouse Night")
///     .genres("Techno, House")
///     .location("The Independent (San Francisco, CA)")
///     .build();
/// ```
pub struct RawRowBuilder {
    row: RawRow,
}

impl RawRowBuilder {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            row: RawRow {
                date: date.into(),
                time: time.into(),
                ..RawRow::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.row.name = name.into();
        self
    }

    pub fn genres(mut self, genres: impl Into<String>) -> Self {
        self.row.genres = genres.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.row.location = location.into();
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.row.price = price.into();
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.row.age = age.into();
        self
    }

    pub fn organizer(mut self, organizer: impl Into<String>) -> Self {
        self.row.organizer = organizer.into();
        self
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}

// ---------------------------------------------------------------------------
// Regions and gazetteer
// ---------------------------------------------------------------------------

/// The Bay Area region, the most common fixture.
pub fn bay_area() -> Region {
    Region {
        key: "BayArea".to_string(),
        name: "Northern California".to_string(),
        timezone: "America/Los_Angeles".to_string(),
    }
}

pub fn seattle() -> Region {
    Region {
        key: "Seattle".to_string(),
        name: "Seattle".to_string(),
        timezone: "America/Los_Angeles".to_string(),
    }
}

/// A small gazetteer covering every city the fixtures mention.
pub fn test_gazetteer() -> Gazetteer {
    Gazetteer::from_entries(
        [
            ("San Francisco", "California", 37.7562, -122.4430),
            ("Oakland", "California", 37.8044, -122.2711),
            ("Seattle", "Washington", 47.6211, -122.3244),
            ("Vancouver", "British Columbia", 49.2827, -123.1207),
        ]
        .map(|(city, admin, lat, lon)| (city.to_string(), admin.to_string(), lat, lon)),
    )
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Defaults with the region set replaced and the snapshot redirected into a
/// test-owned path.
pub fn test_config(snapshot_path: PathBuf, regions: Vec<Region>) -> Config {
    let mut config = Config::defaults();
    config.data.snapshot_path = snapshot_path;
    config.regions = regions;
    config
}
