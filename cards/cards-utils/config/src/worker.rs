use serde::{Deserialize, Serialize};

use crate::error::{required, CardConfigError};
use crate::server::non_blank;

/// Full-scale value of the hashrate bar when none is configured: 1 TH/s.
pub const DEFAULT_MAX_HASHRATE: f64 = 1_000_000_000_000.0;

/// Worker card configuration as written in the dashboard YAML/TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWorkerCardConfig {
    pub worker_entity: Option<String>,
    pub hashrate_entity: Option<String>,
    pub difficulty_entity: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub max_hashrate: Option<f64>,
}

/// Validated worker card configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerCardConfig {
    pub worker_entity: String,
    pub hashrate_entity: String,
    pub difficulty_entity: String,
    pub title: Option<String>,
    pub max_hashrate: f64,
}

impl WorkerCardConfig {
    pub fn from_raw(raw: RawWorkerCardConfig) -> Result<Self, CardConfigError> {
        Ok(Self {
            worker_entity: required(raw.worker_entity, "worker_entity")?,
            hashrate_entity: required(raw.hashrate_entity, "hashrate_entity")?,
            difficulty_entity: required(raw.difficulty_entity, "difficulty_entity")?,
            title: non_blank(raw.title),
            max_hashrate: raw
                .max_hashrate
                .filter(|max| max.is_finite() && *max > 0.0)
                .unwrap_or(DEFAULT_MAX_HASHRATE),
        })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, CardConfigError> {
        Self::from_raw(toml::from_str(toml_str)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CardConfigError> {
        Self::from_raw(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_worker_card_config() {
        let toml_str = r#"
            worker_entity = "sensor.rig_01_best_difficulty"
            hashrate_entity = "sensor.rig_01_hash_rate"
            difficulty_entity = "sensor.rig_01_best_difficulty"
            title = "Rig 01"
            max_hashrate = 5e11
        "#;
        let config = WorkerCardConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.hashrate_entity, "sensor.rig_01_hash_rate");
        assert_eq!(config.title.as_deref(), Some("Rig 01"));
        assert_eq!(config.max_hashrate, 5e11);
    }

    #[test]
    fn test_default_max_hashrate() {
        let json = r#"{
            "worker_entity": "sensor.w",
            "hashrate_entity": "sensor.h",
            "difficulty_entity": "sensor.d"
        }"#;
        let config = WorkerCardConfig::from_json_str(json).unwrap();
        assert_eq!(config.max_hashrate, DEFAULT_MAX_HASHRATE);
        assert!(config.title.is_none());

        let json = r#"{
            "worker_entity": "sensor.w",
            "hashrate_entity": "sensor.h",
            "difficulty_entity": "sensor.d",
            "max_hashrate": 0
        }"#;
        let config = WorkerCardConfig::from_json_str(json).unwrap();
        assert_eq!(config.max_hashrate, DEFAULT_MAX_HASHRATE);
    }

    #[test]
    fn test_missing_worker_fields() {
        let err = WorkerCardConfig::from_raw(RawWorkerCardConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "You need to define a worker_entity");

        let raw = RawWorkerCardConfig {
            worker_entity: Some("sensor.w".to_string()),
            hashrate_entity: Some("sensor.h".to_string()),
            ..Default::default()
        };
        let err = WorkerCardConfig::from_raw(raw).unwrap_err();
        assert_eq!(err.to_string(), "You need to define a difficulty_entity");
    }

    #[test]
    fn test_invalid_toml() {
        let err = WorkerCardConfig::from_toml_str("worker_entity = [").unwrap_err();
        assert!(matches!(err, CardConfigError::Toml(_)));
    }
}
