//! Skill configuration.
//!
//! Stored as JSON on disk; every field is optional and falls back to the
//! defaults below:
//! ```json
//! {
//!   "base_url": "https://api.tfl.gov.uk",
//!   "timeout_secs": 5,
//!   "default_bus_count": 3,
//!   "stops": {
//!     "school": { "stop_id": "490000123ABC", "name": "School Stop", "label": "school" }
//!   }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The two places the skill knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    School,
    Station,
}

/// A stop the skill queries, and how it is spoken about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopConfig {
    /// Upstream stop point identifier (NaPTAN code).
    pub stop_id: String,
    /// Human name of the physical stop.
    pub name: String,
    #[serde(default)]
    pub direction: String,
    /// Destination label used in speech, e.g. `"the station"`.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopsConfig {
    #[serde(default = "default_school_stop")]
    pub school: StopConfig,
    #[serde(default = "default_station_stop")]
    pub station: StopConfig,
}

impl Default for StopsConfig {
    fn default() -> Self {
        Self {
            school: default_school_stop(),
            station: default_station_stop(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline for the arrivals call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Buses reported when the user does not say how many.
    #[serde(default = "default_bus_count")]
    pub default_bus_count: usize,

    /// Buses reported per direction by the combined query.
    #[serde(default = "default_combined_bus_count")]
    pub combined_bus_count: usize,

    #[serde(default)]
    pub stops: StopsConfig,
}

fn default_base_url() -> String {
    "https://api.tfl.gov.uk".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_bus_count() -> usize {
    3
}

const fn default_combined_bus_count() -> usize {
    2
}

fn default_school_stop() -> StopConfig {
    StopConfig {
        stop_id: "490000123ABC".to_string(),
        name: "School Stop".to_string(),
        direction: "westbound".to_string(),
        label: "school".to_string(),
    }
}

fn default_station_stop() -> StopConfig {
    StopConfig {
        stop_id: "490000456DEF".to_string(),
        name: "Station Stop".to_string(),
        direction: "eastbound".to_string(),
        label: "the station".to_string(),
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_bus_count: default_bus_count(),
            combined_bus_count: default_combined_bus_count(),
            stops: StopsConfig::default(),
        }
    }
}

impl SkillConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn stop(&self, destination: Destination) -> &StopConfig {
        match destination {
            Destination::School => &self.stops.school,
            Destination::Station => &self.stops.station,
        }
    }
}
