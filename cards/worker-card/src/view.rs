use card_config::{WorkerCardConfig, DEFAULT_MAX_HASHRATE};
use card_format::{format_grouped, format_hashrate};
use chrono::{DateTime, Utc};
use hass_state::StateSnapshot;
use serde::Serialize;
use worker_status::{classify_last_seen, format_time_since, StatusTier};

/// Display values of the worker card, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerCardView {
    pub worker_name: String,
    pub status: StatusTier,
    pub hashrate: String,
    pub difficulty: String,
    /// Width of the hashrate bar, 0 to 100
    pub hashrate_percent: f64,
    pub last_seen: String,
}

impl WorkerCardView {
    /// Returns `None` when any of the worker, hashrate or difficulty entities is missing.
    pub fn build(
        config: &WorkerCardConfig,
        snapshot: &StateSnapshot,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let worker = snapshot.get(&config.worker_entity)?;
        let hashrate = snapshot.get(&config.hashrate_entity)?;
        let difficulty = snapshot.get(&config.difficulty_entity)?;

        let worker_name = config
            .title
            .as_deref()
            .or_else(|| worker.worker_name())
            .unwrap_or("Worker")
            .to_string();

        let last_seen = worker.last_seen();
        let rate = hashrate.numeric_state();

        Some(Self {
            worker_name,
            status: classify_last_seen(&last_seen, now),
            hashrate: format_hashrate(rate),
            difficulty: format_grouped(difficulty.numeric_state()),
            hashrate_percent: hashrate_percent(rate, config.max_hashrate),
            last_seen: format_time_since(last_seen.timestamp(), now),
        })
    }
}

/// Share of `max_hashrate` reached by `rate`, clamped to 0..=100.
pub fn hashrate_percent(rate: Option<f64>, max_hashrate: f64) -> f64 {
    let max = if max_hashrate.is_finite() && max_hashrate > 0.0 {
        max_hashrate
    } else {
        DEFAULT_MAX_HASHRATE
    };

    match rate {
        Some(rate) => (rate / max * 100.0).clamp(0.0, 100.0),
        None => 0.0,
    }
}
