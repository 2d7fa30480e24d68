use chrono::{DateTime, Utc};
use hass_state::parse_timestamp;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: String,
    pub card_config_path: String,
    pub now: DateTime<Utc>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_args() -> Result<Self, Box<dyn std::error::Error>> {
        Self::parse(&env::args().collect::<Vec<_>>())
    }

    pub fn parse(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let snapshot_path = args
            .iter()
            .position(|arg| arg == "--snapshot" || arg == "-s")
            .and_then(|i| args.get(i + 1))
            .cloned()
            .ok_or("Missing required argument: --snapshot")?;

        let card_config_path = args
            .iter()
            .position(|arg| arg == "--card-config" || arg == "-c")
            .and_then(|i| args.get(i + 1))
            .cloned()
            .ok_or("Missing required argument: --card-config")?;

        // Rendering time is pinned with --now for reproducible output
        let now = match args
            .iter()
            .position(|arg| arg == "--now")
            .and_then(|i| args.get(i + 1))
        {
            Some(raw) => parse_timestamp(raw)
                .ok_or_else(|| format!("Invalid --now timestamp: {}", raw))?,
            None => Utc::now(),
        };

        let output = if args.iter().any(|arg| arg == "--json") {
            OutputFormat::Json
        } else {
            OutputFormat::Html
        };

        Ok(Config {
            snapshot_path,
            card_config_path,
            now,
            output,
        })
    }
}
