use serde::{Deserialize, Serialize};

use crate::error::{required, CardConfigError};

/// Server card configuration as written in the dashboard YAML/TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawServerCardConfig {
    pub address: Option<String>,
    pub workers_count_entity: Option<String>,
    pub best_difficulty_entity: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub network_difficulty_entity: Option<String>,
    #[serde(default)]
    pub network_blocks_entity: Option<String>,
    /// Hashrate sensors of the address's workers, in display order
    #[serde(default)]
    pub worker_hashrate_entities: Vec<String>,
}

/// Validated server card configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerCardConfig {
    pub address: String,
    pub workers_count_entity: String,
    pub best_difficulty_entity: String,
    pub title: Option<String>,
    pub network_difficulty_entity: Option<String>,
    pub network_blocks_entity: Option<String>,
    pub worker_hashrate_entities: Vec<String>,
}

impl ServerCardConfig {
    pub fn from_raw(raw: RawServerCardConfig) -> Result<Self, CardConfigError> {
        Ok(Self {
            address: required(raw.address, "bitcoin address")?,
            workers_count_entity: required(raw.workers_count_entity, "workers_count_entity")?,
            best_difficulty_entity: required(raw.best_difficulty_entity, "best_difficulty_entity")?,
            title: non_blank(raw.title),
            network_difficulty_entity: non_blank(raw.network_difficulty_entity),
            network_blocks_entity: non_blank(raw.network_blocks_entity),
            worker_hashrate_entities: raw.worker_hashrate_entities,
        })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, CardConfigError> {
        Self::from_raw(toml::from_str(toml_str)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CardConfigError> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    /// Card heading; defaults to the mining address.
    pub fn title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Mining Address: {}", self.address),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
