use serde::{Deserialize, Serialize};

/// Liveness tier of a worker, derived from how long ago it last reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Online,
    Warning,
    Offline,
    /// No `last_seen` timestamp at all. Only produced for a single worker.
    Unknown,
}

impl StatusTier {
    /// CSS class of the status dot on the worker card.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTier::Online => "status-active",
            StatusTier::Warning => "status-warning",
            StatusTier::Offline => "status-offline",
            StatusTier::Unknown => "status-unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Online => "Online",
            StatusTier::Warning => "Warning",
            StatusTier::Offline => "Offline",
            StatusTier::Unknown => "Unknown",
        }
    }
}
