use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entity::EntityState;
use crate::error::SnapshotError;

/// The host's current mapping of entity ids to their latest states.
///
/// Deserializes directly from the host's `states` object:
/// `{"sensor.rig_01_hash_rate": {"state": "...", "attributes": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    states: HashMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, state: EntityState) {
        self.states.insert(entity_id.into(), state);
    }

    pub fn with_entity(mut self, entity_id: impl Into<String>, state: EntityState) -> Self {
        self.insert(entity_id, state);
        self
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    /// Numeric state of an entity, `None` when missing or non-numeric.
    pub fn numeric(&self, entity_id: &str) -> Option<f64> {
        self.get(entity_id).and_then(EntityState::numeric_state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(String, EntityState)> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, EntityState)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
