//! gigmap-core — canonical types and the normalization pipeline.
//!
//! # Architecture
//!
//! ```text
//! Feed client ──► Normalizer ──► Resolver ──► Aggregator ──► Snapshot store
//!                                   │
//!                              Gazetteer (static)
//! ```
//!
//! Every stage left of the store is a pure function of its inputs; the store
//! is the only shared mutable state, and it changes by whole-snapshot
//! replacement once per refresh cycle.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod gazetteer;
pub mod normalizer;
pub mod resolver;
pub mod store;
pub mod types;

pub use store::SnapshotStore;
pub use types::{Event, Location, RawRow, Region, Snapshot, ALL_REGIONS_KEY};
