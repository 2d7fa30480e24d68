//! Single worker card: liveness dot, hashrate, best difficulty, a hashrate
//! bar relative to a configured maximum, and time since last seen.

use card_config::{CardConfigError, CardInfo, RawWorkerCardConfig, WorkerCardConfig};
use card_format::escape_html;
use chrono::{DateTime, Utc};
use hass_state::StateSnapshot;
use tracing::debug;

pub mod view;

pub use view::{hashrate_percent, WorkerCardView};

const WORKER_CARD_TEMPLATE: &str = include_str!("../templates/worker_card.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/not_found.html");

pub const CARD_INFO: CardInfo = CardInfo {
    card_type: "minemonitor-worker-card",
    name: "MineMonitor Worker Card",
    description: "A card showing mining worker status",
};

pub const CARD_SIZE: u32 = 3;

#[derive(Debug, Clone)]
pub struct WorkerCard {
    config: WorkerCardConfig,
}

impl WorkerCard {
    pub fn new(config: WorkerCardConfig) -> Self {
        Self { config }
    }

    pub fn from_raw(raw: RawWorkerCardConfig) -> Result<Self, CardConfigError> {
        Ok(Self::new(WorkerCardConfig::from_raw(raw)?))
    }

    pub fn config(&self) -> &WorkerCardConfig {
        &self.config
    }

    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    pub fn view(&self, snapshot: &StateSnapshot, now: DateTime<Utc>) -> Option<WorkerCardView> {
        WorkerCardView::build(&self.config, snapshot, now)
    }

    pub fn render(&self, snapshot: &StateSnapshot, now: DateTime<Utc>) -> String {
        match self.view(snapshot, now) {
            Some(view) => render_view(&view),
            None => {
                debug!(
                    "Worker entities not found: {} / {} / {}",
                    self.config.worker_entity,
                    self.config.hashrate_entity,
                    self.config.difficulty_entity
                );
                NOT_FOUND_TEMPLATE.replace("{message}", "Worker entities not found")
            }
        }
    }
}

pub fn render_view(view: &WorkerCardView) -> String {
    WORKER_CARD_TEMPLATE
        .replace("{hashrate_percent}", &format!("{:.2}", view.hashrate_percent))
        .replace("{worker_name}", &escape_html(&view.worker_name))
        .replace("{status_class}", view.status.css_class())
        .replace("{status_label}", view.status.label())
        .replace("{hashrate}", &view.hashrate)
        .replace("{difficulty}", &view.difficulty)
        .replace("{last_seen}", &view.last_seen)
}
