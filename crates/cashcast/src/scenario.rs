//! Scenario files
//!
//! A scenario is a YAML document holding a `ProjectionInput` at its top level
//! plus the zone and (optionally) the frozen "now" to resolve calendar days
//! with:
//!
//! ```yaml
//! time_zone: America/Sao_Paulo
//! now: 2025-03-20T12:00:00Z
//! accounts:
//!   - id: main
//!     name: Main
//!     kind: checking
//!     balance: 250000
//!     balance_updated_at: 2025-03-10T14:00:00Z
//! fixed_expenses:
//!   - { id: rent, name: Rent, amount: 180000, due_day: 10 }
//! options:
//!   projection_days: 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cashcast_core::config::ProjectionInput;
use cashcast_core::error::DateError;
use cashcast_core::timezone::Clock;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_time_zone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// IANA zone used for every calendar-day decision
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Frozen current instant; the system clock when absent
    #[serde(default)]
    pub now: Option<Timestamp>,
    #[serde(flatten)]
    pub input: ProjectionInput,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl ScenarioFile {
    /// Clock for this scenario. `zone_override` wins over the file's zone.
    pub fn clock(&self, zone_override: Option<&str>) -> Result<Clock, DateError> {
        let zone = zone_override.unwrap_or(&self.time_zone);
        match self.now {
            Some(now) => Clock::fixed(now, zone),
            None => Clock::system(zone),
        }
    }
}

/// Parse scenario YAML. `origin` only labels errors.
pub fn parse_scenario(yaml: &str, origin: &Path) -> Result<ScenarioFile, ScenarioError> {
    serde_saphyr::from_str(yaml).map_err(|e| ScenarioError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn load_scenario(path: &Path) -> Result<ScenarioFile, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = parse_scenario(&content, path)?;

    debug!(
        path = %path.display(),
        time_zone = %scenario.time_zone,
        entities = scenario.input.entity_count(),
        "scenario loaded"
    );
    Ok(scenario)
}
