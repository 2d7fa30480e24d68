use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::CardConfigError;
use crate::server::{RawServerCardConfig, ServerCardConfig};
use crate::worker::{RawWorkerCardConfig, WorkerCardConfig};

/// A set of cards to render, loaded from a TOML file:
///
/// ```toml
/// [[server_cards]]
/// address = "bc1q..."
/// workers_count_entity = "sensor.bc1q_workers_count"
/// best_difficulty_entity = "sensor.bc1q_best_difficulty"
///
/// [[worker_cards]]
/// worker_entity = "sensor.rig_01_best_difficulty"
/// hashrate_entity = "sensor.rig_01_hash_rate"
/// difficulty_entity = "sensor.rig_01_best_difficulty"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server_cards: Vec<RawServerCardConfig>,
    #[serde(default)]
    pub worker_cards: Vec<RawWorkerCardConfig>,
}

impl DashboardConfig {
    pub fn from_path(path: &str) -> Result<Self, CardConfigError> {
        Ok(Config::builder()
            .add_source(File::new(path, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, CardConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Validate every server card, failing on the first invalid one.
    pub fn server_cards(&self) -> Result<Vec<ServerCardConfig>, CardConfigError> {
        self.server_cards
            .iter()
            .cloned()
            .map(ServerCardConfig::from_raw)
            .collect()
    }

    /// Validate every worker card, failing on the first invalid one.
    pub fn worker_cards(&self) -> Result<Vec<WorkerCardConfig>, CardConfigError> {
        self.worker_cards
            .iter()
            .cloned()
            .map(WorkerCardConfig::from_raw)
            .collect()
    }
}
