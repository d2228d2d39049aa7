//! CSV → [`RawRow`] splitting.
//!
//! Upstream feeds have no header row and a fixed 10-column schema, but the
//! rows are hand-maintained: quoted venue fields legally contain commas, and
//! short rows are padded with empty fields rather than rejected.

use gigmap_core::RawRow;

/// Split a raw feed body into rows. A record the CSV reader cannot make
/// sense of fails the whole feed — a region-scoped decode error — not the
/// cycle.
pub fn parse(body: &str) -> Result<Vec<RawRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(RawRow {
            date: field(0),
            name: field(1),
            genres: field(2),
            location: field(3),
            time: field(4),
            price: field(5),
            age: field(6),
            organizer: field(7),
            ticket_link: field(8),
            event_link: field(9),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
