//! Server overview card: workers, total hashrate, best difficulty and
//! worker liveness for one mining address, plus optional network stats.

use card_config::{CardConfigError, CardInfo, RawServerCardConfig, ServerCardConfig};
use card_format::escape_html;
use chrono::{DateTime, Utc};
use hass_state::StateSnapshot;
use tracing::debug;

pub mod view;

pub use view::ServerCardView;

const SERVER_CARD_TEMPLATE: &str = include_str!("../templates/server_card.html");
const NETWORK_BOX_TEMPLATE: &str = include_str!("../templates/network_box.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/not_found.html");

pub const CARD_INFO: CardInfo = CardInfo {
    card_type: "minemonitor-server-card",
    name: "MineMonitor Server Card",
    description: "A card showing mining server overview",
};

/// Layout height hint for the dashboard grid.
pub const CARD_SIZE: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerCard {
    config: ServerCardConfig,
}

impl ServerCard {
    pub fn new(config: ServerCardConfig) -> Self {
        Self { config }
    }

    /// Validate a raw config and build the card, failing on missing entities.
    pub fn from_raw(raw: RawServerCardConfig) -> Result<Self, CardConfigError> {
        Ok(Self::new(ServerCardConfig::from_raw(raw)?))
    }

    pub fn config(&self) -> &ServerCardConfig {
        &self.config
    }

    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    pub fn view(&self, snapshot: &StateSnapshot, now: DateTime<Utc>) -> Option<ServerCardView> {
        ServerCardView::build(&self.config, snapshot, now)
    }

    /// Render the card to HTML. Recomputes everything from `snapshot`.
    pub fn render(&self, snapshot: &StateSnapshot, now: DateTime<Utc>) -> String {
        match self.view(snapshot, now) {
            Some(view) => render_view(&view),
            None => {
                debug!(
                    "Server entities not found: {} / {}",
                    self.config.workers_count_entity, self.config.best_difficulty_entity
                );
                not_found("Server entities not found")
            }
        }
    }
}

pub fn render_view(view: &ServerCardView) -> String {
    SERVER_CARD_TEMPLATE
        .replace("{title}", &escape_html(&view.title))
        .replace("{address}", &escape_html(&view.address))
        .replace("{workers_count}", &escape_html(&view.workers_count))
        .replace("{total_hashrate}", &view.total_hashrate)
        .replace("{best_difficulty}", &view.best_difficulty)
        .replace("{online_count}", &view.status.online.to_string())
        .replace("{warning_count}", &view.status.warning.to_string())
        .replace("{offline_count}", &view.status.offline.to_string())
        .replace("{network_info}", &network_info(view))
}

fn network_info(view: &ServerCardView) -> String {
    if !view.has_network_info() {
        return String::new();
    }

    let mut boxes = String::new();
    if let Some(difficulty) = &view.network_difficulty {
        boxes.push_str(&network_box("Network Difficulty", difficulty));
    }
    if let Some(blocks) = &view.network_blocks {
        boxes.push_str(&network_box("Block Height", blocks));
    }

    format!("    <div class=\"network-info\">\n{}    </div>\n", boxes)
}

fn network_box(label: &str, value: &str) -> String {
    NETWORK_BOX_TEMPLATE
        .replace("{label}", label)
        .replace("{value}", &escape_html(value))
}

fn not_found(message: &str) -> String {
    NOT_FOUND_TEMPLATE.replace("{message}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use hass_state::EntityState;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn card() -> ServerCard {
        ServerCard::from_raw(RawServerCardConfig {
            address: Some("bc1qexampleaddress".to_string()),
            workers_count_entity: Some("sensor.workers_count".to_string()),
            best_difficulty_entity: Some("sensor.best_difficulty".to_string()),
            network_blocks_entity: Some("sensor.network_blocks".to_string()),
            worker_hashrate_entities: vec![
                "sensor.rig_01_hash_rate".to_string(),
                "sensor.rig_02_hash_rate".to_string(),
            ],
            ..Default::default()
        })
        .unwrap()
    }

    fn snapshot() -> StateSnapshot {
        StateSnapshot::new()
            .with_entity("sensor.workers_count", EntityState::new("2"))
            .with_entity("sensor.best_difficulty", EntityState::new("1500"))
            .with_entity(
                "sensor.rig_01_hash_rate",
                EntityState::new("2500000")
                    .with_attribute("last_seen", (now() - Duration::minutes(45)).to_rfc3339()),
            )
            .with_entity("sensor.rig_02_hash_rate", EntityState::new("5"))
            .with_entity("sensor.network_blocks", EntityState::new("889123"))
    }

    #[test]
    fn test_render_server_card() {
        let html = card().render(&snapshot(), now());
        assert!(
            html.contains(r#"<div class="card-title">Mining Address: bc1qexampleaddress</div>"#)
        );
        assert!(html.contains(r#"<div class="stat-value">2</div>"#));
        assert!(html.contains(r#"<div class="stat-value">2.50 MH/s</div>"#));
        assert!(html.contains(r#"<div class="stat-value">1.50K</div>"#));
        assert!(html.contains("<div>1 Online</div>"));
        assert!(html.contains("<div>0 Warning</div>"));
        assert!(html.contains("<div>1 Offline</div>"));
        assert!(html.contains("Block Height"));
        assert!(html.contains("889123"));
        assert!(!html.contains("Network Difficulty"));
        assert!(!html.contains("{network_info}"));
    }

    #[test]
    fn test_render_without_network_section() {
        let snapshot = snapshot();
        let mut config = card().config().clone();
        config.network_blocks_entity = None;

        let html = ServerCard::new(config).render(&snapshot, now());
        assert!(!html.contains(r#"class="network-info""#));
    }

    #[test]
    fn test_render_entities_not_found() {
        let html = card().render(&StateSnapshot::new(), now());
        assert!(html.contains("Server entities not found"));
        assert!(!html.contains("Total Hashrate"));
    }

    #[test]
    fn test_render_escapes_title() {
        let mut config = card().config().clone();
        config.title = Some("<script>alert(1)</script> {address}".to_string());

        let html = ServerCard::new(config).render(&snapshot(), now());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &#123;address&#125;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let card = card();
        let snapshot = snapshot();
        assert_eq!(card.render(&snapshot, now()), card.render(&snapshot, now()));
    }

    #[test]
    fn test_from_raw_rejects_missing_address() {
        let err = ServerCard::from_raw(RawServerCardConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "You need to define a bitcoin address");
    }

    #[test]
    fn test_card_metadata() {
        assert_eq!(card().card_size(), 5);
        assert_eq!(CARD_INFO.card_type, "minemonitor-server-card");
    }
}
