//! Card configuration for the MineMonitor dashboard cards.
//!
//! Raw configs mirror what a user writes in the dashboard; `from_raw`
//! validates them and fails fast on missing required entities.

pub mod dashboard;
pub mod error;
pub mod registry;
pub mod server;
pub mod worker;

pub use dashboard::DashboardConfig;
pub use error::CardConfigError;
pub use registry::CardInfo;
pub use server::{RawServerCardConfig, ServerCardConfig};
pub use worker::{RawWorkerCardConfig, WorkerCardConfig, DEFAULT_MAX_HASHRATE};
