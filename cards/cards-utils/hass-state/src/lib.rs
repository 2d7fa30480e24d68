//! Host state snapshot consumed by the MineMonitor cards.
//!
//! The host owns entity registration and refresh; cards only ever see an
//! immutable [`StateSnapshot`] handed to them at render time.

pub mod entity;
pub mod error;
pub mod snapshot;

pub use entity::{parse_timestamp, EntityState, LastSeen};
pub use error::SnapshotError;
pub use snapshot::StateSnapshot;
