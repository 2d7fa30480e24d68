use card_config::ServerCardConfig;
use card_format::{format_difficulty, format_grouped, format_hashrate};
use chrono::{DateTime, Utc};
use hass_state::StateSnapshot;
use serde::Serialize;
use worker_status::{count_worker_statuses, total_hashrate, StatusCounts};

/// Display values of the server card, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerCardView {
    pub title: String,
    pub address: String,
    pub workers_count: String,
    pub total_hashrate: String,
    pub best_difficulty: String,
    pub status: StatusCounts,
    pub network_difficulty: Option<String>,
    pub network_blocks: Option<String>,
}

impl ServerCardView {
    /// Returns `None` when the workers-count or best-difficulty entity is missing.
    pub fn build(
        config: &ServerCardConfig,
        snapshot: &StateSnapshot,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let workers_count = snapshot.get(&config.workers_count_entity)?;
        let best_difficulty = snapshot.get(&config.best_difficulty_entity)?;

        let hashrate = total_hashrate(&config.worker_hashrate_entities, snapshot);

        let network_difficulty = config
            .network_difficulty_entity
            .as_deref()
            .and_then(|id| snapshot.get(id))
            .map(|entity| format_grouped(entity.numeric_state()));

        let network_blocks = config
            .network_blocks_entity
            .as_deref()
            .and_then(|id| snapshot.get(id))
            .map(|entity| entity.state.clone())
            .filter(|blocks| !blocks.is_empty());

        Some(Self {
            title: config.title(),
            address: config.address.clone(),
            workers_count: workers_count.state.clone(),
            total_hashrate: format_hashrate(Some(hashrate)),
            best_difficulty: format_difficulty(best_difficulty.numeric_state()),
            status: count_worker_statuses(&config.worker_hashrate_entities, snapshot, now),
            network_difficulty,
            network_blocks,
        })
    }

    pub fn has_network_info(&self) -> bool {
        self.network_difficulty.is_some() || self.network_blocks.is_some()
    }
}
