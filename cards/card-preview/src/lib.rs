//! Offline preview of the MineMonitor cards: renders every configured card
//! against a saved host state snapshot.

use card_config::DashboardConfig;
use chrono::{DateTime, Utc};
use hass_state::StateSnapshot;
use serde_json::json;
use server_card::ServerCard;
use tracing::info;
use worker_card::WorkerCard;

pub mod config;

use config::OutputFormat;

pub fn render_dashboard(
    dashboard: &DashboardConfig,
    snapshot: &StateSnapshot,
    now: DateTime<Utc>,
    output: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let server_cards: Vec<ServerCard> = dashboard
        .server_cards()?
        .into_iter()
        .map(ServerCard::new)
        .collect();
    let worker_cards: Vec<WorkerCard> = dashboard
        .worker_cards()?
        .into_iter()
        .map(WorkerCard::new)
        .collect();

    info!(
        "Rendering {} server card(s) and {} worker card(s) against {} entities",
        server_cards.len(),
        worker_cards.len(),
        snapshot.len()
    );

    match output {
        OutputFormat::Html => {
            let mut html = String::new();
            for card in &server_cards {
                html.push_str(&card.render(snapshot, now));
            }
            for card in &worker_cards {
                html.push_str(&card.render(snapshot, now));
            }
            Ok(html)
        }
        OutputFormat::Json => {
            let cards: Vec<serde_json::Value> = server_cards
                .iter()
                .map(|card| {
                    json!({
                        "type": server_card::CARD_INFO.card_type,
                        "view": card.view(snapshot, now)
                    })
                })
                .chain(worker_cards.iter().map(|card| {
                    json!({
                        "type": worker_card::CARD_INFO.card_type,
                        "view": card.view(snapshot, now)
                    })
                }))
                .collect();
            Ok(serde_json::to_string_pretty(&json!({ "cards": cards }))?)
        }
    }
}
