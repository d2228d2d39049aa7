//! Error kinds for the pipeline.
//!
//! Every kind is scoped to the smallest unit it can poison: one row, one
//! venue string, or one persistence attempt. None of them aborts a refresh
//! cycle — the scheduler always publishes a snapshot.

use thiserror::Error;

/// A row whose date could not name a real calendar day. The scheduler drops
/// the row and keeps the rest of the region's feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("unrecognized month abbreviation {0:?}")]
    UnknownMonth(String),
    #[error("date {0:?} has no day-of-month")]
    MissingDay(String),
    #[error("day-of-month {0:?} is not a number")]
    InvalidDay(String),
    #[error("month {month} has no day {day}")]
    InvalidDate { month: u32, day: u32 },
}

/// A venue string whose embedded state abbreviation is not in the lookup
/// table. Non-fatal: the event keeps an unresolved state and null
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state abbreviation {0:?}")]
pub struct LocationResolutionError(pub String);

/// A failed snapshot write or read. Logged by callers; never blocks
/// publication of the in-memory snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}
