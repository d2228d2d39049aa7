//! Configuration types for gigmap.
//!
//! [`Config::load`] layers an optional TOML file over the built-in defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests). The default `[[regions]]` set is the full
//! production list; a deployment that wants a subset overrides the array
//! wholesale in its config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::Region;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[feed]
base_url              = "https://19hz.info/events_"
timeout_secs          = 30
refresh_interval_secs = 600
startup_delay_secs    = 1

[server]
bind = "127.0.0.1:8000"

[data]
gazetteer_path = "cities.csv"
snapshot_path  = "snapshot.json"

[[regions]]
key      = "BayArea"
name     = "Northern California"
timezone = "America/Los_Angeles"

[[regions]]
key      = "LosAngeles"
name     = "Southern California"
timezone = "America/Los_Angeles"

[[regions]]
key      = "Texas"
name     = "Texas"
timezone = "America/Chicago"

[[regions]]
key      = "Miami"
name     = "Florida"
timezone = "America/New_York"

[[regions]]
key      = "Atlanta"
name     = "Atlanta"
timezone = "America/New_York"

[[regions]]
key      = "Seattle"
name     = "Seattle"
timezone = "America/Los_Angeles"

[[regions]]
key      = "DC"
name     = "Washington DC"
timezone = "America/New_York"

[[regions]]
key      = "Iowa"
name     = "Iowa / Nebraska"
timezone = "America/Chicago"

[[regions]]
key      = "CHI"
name     = "Chicago"
timezone = "America/Chicago"

[[regions]]
key      = "Detroit"
name     = "Detroit"
timezone = "America/Detroit"

[[regions]]
key      = "Massachusetts"
name     = "Massachusetts"
timezone = "America/New_York"

[[regions]]
key      = "LasVegas"
name     = "Las Vegas"
timezone = "America/Los_Angeles"

[[regions]]
key      = "Phoenix"
name     = "Phoenix"
timezone = "America/Phoenix"

[[regions]]
key      = "PNW"
name     = "Portland / Vancouver"
timezone = "America/Los_Angeles"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// The fixed region set. Overriding `[[regions]]` replaces the whole
    /// array, not individual entries.
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// `[feed]` section: upstream endpoint and refresh cadence.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request fetch timeout. A timed-out region behaves exactly like a
    /// failed one: skipped this cycle, retried next cycle.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Warm-up delay before the first cycle after process start.
    #[serde(default = "default_startup_delay_secs")]
    pub startup_delay_secs: u64,
}

fn default_base_url() -> String { "https://19hz.info/events_".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_refresh_interval_secs() -> u64 { 600 }
fn default_startup_delay_secs() -> u64 { 1 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            startup_delay_secs: default_startup_delay_secs(),
        }
    }
}

/// `[server]` section: where the read API listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[data]` section: gazetteer source and snapshot persistence location.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_gazetteer_path")]
    pub gazetteer_path: PathBuf,
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

fn default_gazetteer_path() -> PathBuf { PathBuf::from("cities.csv") }
fn default_snapshot_path() -> PathBuf { PathBuf::from("snapshot.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            gazetteer_path: default_gazetteer_path(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, layered under the given file when one is
    /// passed. An explicitly passed path must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
