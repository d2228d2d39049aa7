//! Location resolver — venue-string grammar and gazetteer lookup.
//!
//! Feed locations follow `"<venue> (<city>[, <admin>[, <admin2>]])"` when
//! they carry a location at all. Resolution never fails a row: an unknown
//! abbreviation leaves the state unresolved, and a gazetteer miss leaves the
//! coordinates null.

use phf::phf_map;

use crate::error::LocationResolutionError;
use crate::gazetteer::Gazetteer;
use crate::types::{Location, Region};

/// US state/territory and Canadian province abbreviations, as the feeds
/// write them.
static STATE_ABBREVIATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "AK" => "Alaska",
    "AL" => "Alabama",
    "AR" => "Arkansas",
    "AS" => "American Samoa",
    "AZ" => "Arizona",
    "CA" => "California",
    "CO" => "Colorado",
    "CT" => "Connecticut",
    "DC" => "District of Columbia",
    "DE" => "Delaware",
    "FL" => "Florida",
    "GA" => "Georgia",
    "GU" => "Guam",
    "HI" => "Hawaii",
    "IA" => "Iowa",
    "ID" => "Idaho",
    "IL" => "Illinois",
    "IN" => "Indiana",
    "KS" => "Kansas",
    "KY" => "Kentucky",
    "LA" => "Louisiana",
    "MA" => "Massachusetts",
    "MD" => "Maryland",
    "ME" => "Maine",
    "MI" => "Michigan",
    "MN" => "Minnesota",
    "MO" => "Missouri",
    "MP" => "Northern Mariana Islands",
    "MS" => "Mississippi",
    "MT" => "Montana",
    "NA" => "National",
    "NC" => "North Carolina",
    "ND" => "North Dakota",
    "NE" => "Nebraska",
    "NH" => "New Hampshire",
    "NJ" => "New Jersey",
    "NM" => "New Mexico",
    "NV" => "Nevada",
    "NY" => "New York",
    "OH" => "Ohio",
    "OK" => "Oklahoma",
    "OR" => "Oregon",
    "PA" => "Pennsylvania",
    "PR" => "Puerto Rico",
    "RI" => "Rhode Island",
    "SC" => "South Carolina",
    "SD" => "South Dakota",
    "TN" => "Tennessee",
    "TX" => "Texas",
    "UT" => "Utah",
    "VA" => "Virginia",
    "VI" => "Virgin Islands",
    "VT" => "Vermont",
    "WA" => "Washington",
    "WI" => "Wisconsin",
    "WV" => "West Virginia",
    "WY" => "Wyoming",
    "AB" => "Alberta",
    "BC" => "British Columbia",
    "MB" => "Manitoba",
    "NB" => "New Brunswick",
    "NL" => "Newfoundland and Labrador",
    "NT" => "Northwest Territories",
    "NS" => "Nova Scotia",
    "NU" => "Nunavut",
    "ON" => "Ontario",
    "PE" => "Prince Edward Island",
    "QC" => "Quebec",
    "SK" => "Saskatchewan",
    "YT" => "Yukon",
};

/// Expand a state/province abbreviation to its full name.
pub fn expand_state(abbrev: &str) -> Result<&'static str, LocationResolutionError> {
    STATE_ABBREVIATIONS
        .get(abbrev)
        .copied()
        .ok_or_else(|| LocationResolutionError(abbrev.to_string()))
}

/// Resolve a raw location string against the owning region and the
/// gazetteer.
pub fn resolve(raw: &str, region: &Region, gazetteer: &Gazetteer) -> Location {
    let (venue, city, state) = split_location(raw, region);

    // Regional sub-labels ("Northern California", "Southern California")
    // share one gazetteer entry.
    let state = if state.contains("California") {
        "California".to_string()
    } else {
        state
    };

    let coords = gazetteer.lookup(&city, &state);
    Location {
        venue,
        city,
        state,
        lat: coords.map(|(lat, _)| lat),
        lon: coords.map(|(_, lon)| lon),
    }
}

/// Apply the venue-string grammar, returning `(venue, city, state)`.
///
/// The parenthetical is the text between the first `(` and the next `)`
/// after it; without one, the whole string is the venue and the region
/// supplies the state.
fn split_location(raw: &str, region: &Region) -> (String, String, String) {
    let parenthetical = raw.find('(').and_then(|open| {
        let inner = &raw[open + 1..];
        inner.find(')').map(|close| (open, &inner[..close]))
    });

    let Some((open, inner)) = parenthetical else {
        return (raw.trim().to_string(), String::new(), region.name.clone());
    };

    let venue = raw[..open].trim().to_string();
    let segments: Vec<&str> = inner.split(',').collect();

    match segments.as_slice() {
        [city, abbrev] => {
            let city = city.trim().to_string();
            (venue, city, expand_or_warn(abbrev.trim(), raw))
        }
        // The first segment of a three-part location is a secondary
        // locality; the feed's convention is then city, admin.
        [_, city, abbrev] => {
            let city = city.trim().to_string();
            (venue, city, expand_or_warn(abbrev.trim(), raw))
        }
        // Zero commas, or more commas than the grammar knows: the whole
        // parenthetical is the city and the region supplies the state.
        _ => (venue, inner.to_string(), region.name.clone()),
    }
}

fn expand_or_warn(abbrev: &str, raw: &str) -> String {
    match expand_state(abbrev) {
        Ok(state) => state.to_string(),
        Err(err) => {
            tracing::warn!(%err, location = raw, "state left unresolved");
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
