use std::fs;
use tracing::{error, info};

use card_config::DashboardConfig;
use card_preview::{config::Config, render_dashboard};
use hass_state::StateSnapshot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args()?;
    info!("Snapshot: {}", config.snapshot_path);
    info!("Card config: {}", config.card_config_path);
    info!("Rendering at: {}", config.now.to_rfc3339());

    let snapshot = StateSnapshot::from_json(&fs::read_to_string(&config.snapshot_path)?)?;
    let dashboard = DashboardConfig::from_path(&config.card_config_path)?;

    match render_dashboard(&dashboard, &snapshot, config.now, config.output) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Failed to render cards: {}", e);
            Err(e)
        }
    }
}
