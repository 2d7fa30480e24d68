//! Worker liveness for the MineMonitor cards.
//!
//! A worker's `last_seen` timestamp is bucketed into online / warning /
//! offline tiers. The current time is always passed in by the caller.

pub mod aggregate;
pub mod staleness;
pub mod tier;

pub use aggregate::{
    count_statuses, count_worker_statuses, total_hashrate, StatusCounts, WorkerRecord,
};
pub use staleness::{
    classify, classify_elapsed, classify_last_seen, elapsed_minutes, format_time_since,
    ONLINE_THRESHOLD_MINS, WARNING_THRESHOLD_MINS,
};
pub use tier::StatusTier;
