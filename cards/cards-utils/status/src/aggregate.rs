use chrono::{DateTime, Utc};
use hass_state::{EntityState, LastSeen, StateSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::staleness::classify;
use crate::tier::StatusTier;

/// A worker as seen by the aggregate counter: when it last reported and its rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerRecord {
    pub last_seen: LastSeen,
    pub hashrate: Option<f64>,
}

impl WorkerRecord {
    pub fn new(last_seen: impl Into<LastSeen>, hashrate: Option<f64>) -> Self {
        Self {
            last_seen: last_seen.into(),
            hashrate,
        }
    }

    pub fn from_entity(entity: &EntityState) -> Self {
        Self {
            last_seen: entity.last_seen(),
            hashrate: entity.numeric_state(),
        }
    }

    /// Tier of this worker within the aggregate.
    ///
    /// Never `Unknown`: without a timestamp, a positive rate counts as online
    /// and anything else as offline.
    pub fn tier(&self, now: DateTime<Utc>) -> StatusTier {
        match self.last_seen {
            LastSeen::At(ts) => classify(Some(ts), now),
            LastSeen::Invalid => StatusTier::Offline,
            LastSeen::Absent => match self.hashrate {
                Some(rate) if rate > 0.0 => StatusTier::Online,
                _ => StatusTier::Offline,
            },
        }
    }
}

/// Number of workers in each liveness tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub online: u32,
    pub warning: u32,
    pub offline: u32,
}

impl StatusCounts {
    pub fn record(&mut self, tier: StatusTier) {
        match tier {
            StatusTier::Online => self.online += 1,
            StatusTier::Warning => self.warning += 1,
            StatusTier::Offline | StatusTier::Unknown => self.offline += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.online + self.warning + self.offline
    }
}

/// Count workers per tier.
pub fn count_statuses<'a, I>(workers: I, now: DateTime<Utc>) -> StatusCounts
where
    I: IntoIterator<Item = &'a WorkerRecord>,
{
    let mut counts = StatusCounts::default();
    for worker in workers {
        counts.record(worker.tier(now));
    }
    counts
}

/// Count the tiers of the configured worker entities.
///
/// Entities missing from the snapshot are skipped entirely.
pub fn count_worker_statuses<S>(
    entity_ids: &[S],
    snapshot: &StateSnapshot,
    now: DateTime<Utc>,
) -> StatusCounts
where
    S: AsRef<str>,
{
    let records: Vec<WorkerRecord> = entity_ids
        .iter()
        .filter_map(|id| {
            let entity = snapshot.get(id.as_ref());
            if entity.is_none() {
                debug!("Worker entity not in snapshot: {}", id.as_ref());
            }
            entity
        })
        .map(WorkerRecord::from_entity)
        .collect();

    count_statuses(&records, now)
}

/// Sum the numeric states of the configured worker hashrate entities.
///
/// Missing or non-numeric entities contribute nothing.
pub fn total_hashrate<S>(entity_ids: &[S], snapshot: &StateSnapshot) -> f64
where
    S: AsRef<str>,
{
    entity_ids
        .iter()
        .filter_map(|id| snapshot.numeric(id.as_ref()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn seen_mins_ago(mins: i64) -> WorkerRecord {
        WorkerRecord::new(now() - Duration::minutes(mins), None)
    }

    fn unseen(rate: Option<f64>) -> WorkerRecord {
        WorkerRecord::new(LastSeen::Absent, rate)
    }

    #[test]
    fn test_count_mixed_workers() {
        let workers = vec![
            seen_mins_ago(5),
            seen_mins_ago(45),
            unseen(Some(5.0)),
            unseen(Some(0.0)),
        ];

        let counts = count_statuses(&workers, now());
        assert_eq!(
            counts,
            StatusCounts {
                online: 2,
                warning: 0,
                offline: 2
            }
        );
    }

    #[test]
    fn test_count_empty() {
        let workers: Vec<WorkerRecord> = Vec::new();
        let counts = count_statuses(&workers, now());
        assert_eq!(counts, StatusCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_count_is_order_independent() {
        let mut workers = vec![
            seen_mins_ago(1),
            seen_mins_ago(12),
            seen_mins_ago(31),
            unseen(Some(2.5)),
            unseen(None),
            WorkerRecord::new(LastSeen::Invalid, Some(9.0)),
        ];

        let forward = count_statuses(&workers, now());
        workers.reverse();
        let reversed = count_statuses(&workers, now());
        workers.rotate_left(2);
        let rotated = count_statuses(&workers, now());

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
        assert_eq!(
            forward,
            StatusCounts {
                online: 2,
                warning: 1,
                offline: 3
            }
        );
    }

    #[test]
    fn test_timestamp_wins_over_rate() {
        let stale_but_hashing = WorkerRecord::new(now() - Duration::minutes(40), Some(1e12));
        assert_eq!(stale_but_hashing.tier(now()), StatusTier::Offline);
    }

    #[test]
    fn test_unreadable_timestamp_is_offline() {
        let hashing = WorkerRecord::new(LastSeen::Invalid, Some(5e11));
        assert_eq!(hashing.tier(now()), StatusTier::Offline);
    }

    #[test]
    fn test_zero_last_seen_falls_back_to_rate() {
        let entity = EntityState::new("5").with_attribute("last_seen", 0);
        let record = WorkerRecord::from_entity(&entity);
        assert_eq!(record.last_seen, LastSeen::Absent);
        assert_eq!(record.tier(now()), StatusTier::Online);
    }

    #[test]
    fn test_negative_rate_without_timestamp_is_offline() {
        assert_eq!(unseen(Some(-1.0)).tier(now()), StatusTier::Offline);
    }

    #[test]
    fn test_count_worker_statuses_skips_missing() {
        let fresh = (now() - Duration::minutes(2)).to_rfc3339();
        let snapshot = StateSnapshot::new()
            .with_entity(
                "sensor.rig_01_hash_rate",
                EntityState::new("1.2").with_attribute("last_seen", fresh),
            )
            .with_entity("sensor.rig_02_hash_rate", EntityState::new("0"));

        let ids = [
            "sensor.rig_01_hash_rate",
            "sensor.rig_02_hash_rate",
            "sensor.rig_03_hash_rate",
        ];
        let counts = count_worker_statuses(&ids, &snapshot, now());
        assert_eq!(
            counts,
            StatusCounts {
                online: 1,
                warning: 0,
                offline: 1
            }
        );
    }

    #[test]
    fn test_total_hashrate() {
        let snapshot = StateSnapshot::new()
            .with_entity("sensor.a", EntityState::new("1000"))
            .with_entity("sensor.b", EntityState::new("500.5"))
            .with_entity("sensor.c", EntityState::new("unavailable"));

        let ids = vec![
            "sensor.a".to_string(),
            "sensor.b".to_string(),
            "sensor.c".to_string(),
            "sensor.missing".to_string(),
        ];
        assert_eq!(total_hashrate(&ids, &snapshot), 1500.5);
    }

    #[test]
    fn test_total_hashrate_empty() {
        let ids: [&str; 0] = [];
        assert_eq!(total_hashrate(&ids, &StateSnapshot::new()), 0.0);

        let snapshot = StateSnapshot::new().with_entity("sensor.a", EntityState::new("n/a"));
        assert_eq!(total_hashrate(&["sensor.a"], &snapshot), 0.0);
    }
}
