use chrono::{DateTime, Utc};
use hass_state::LastSeen;

use crate::tier::StatusTier;

/// Workers seen within this many minutes are online.
pub const ONLINE_THRESHOLD_MINS: i64 = 10;

/// Workers seen within this many minutes (but not online) are in warning.
pub const WARNING_THRESHOLD_MINS: i64 = 30;

/// Whole minutes elapsed between `last_seen` and `now`, rounded down.
///
/// Negative when `last_seen` lies in the future.
pub fn elapsed_minutes(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_seen).num_milliseconds().div_euclid(60_000)
}

/// Bucket an elapsed duration into online / warning / offline.
pub fn classify_elapsed(elapsed_mins: i64) -> StatusTier {
    if elapsed_mins < ONLINE_THRESHOLD_MINS {
        StatusTier::Online
    } else if elapsed_mins < WARNING_THRESHOLD_MINS {
        StatusTier::Warning
    } else {
        StatusTier::Offline
    }
}

/// Classify a single worker by its last-seen timestamp.
pub fn classify(last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> StatusTier {
    match last_seen {
        Some(ts) => classify_elapsed(elapsed_minutes(ts, now)),
        None => StatusTier::Unknown,
    }
}

/// Classify a worker from its `last_seen` attribute.
///
/// An unreadable timestamp can never fall inside a threshold, so it is offline.
pub fn classify_last_seen(last_seen: &LastSeen, now: DateTime<Utc>) -> StatusTier {
    match last_seen {
        LastSeen::Absent => StatusTier::Unknown,
        LastSeen::At(ts) => classify(Some(*ts), now),
        LastSeen::Invalid => StatusTier::Offline,
    }
}

/// Format time since a worker was last seen ("Just now", "5 minutes ago", ...)
pub fn format_time_since(last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last_seen) = last_seen else {
        return "Unknown".to_string();
    };

    let mins = elapsed_minutes(last_seen, now);
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{} ago", plural(mins, "minute"));
    }

    let hours = mins / 60;
    if hours < 24 {
        return format!("{} ago", plural(hours, "hour"));
    }

    format!("{} ago", plural(hours / 24, "day"))
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}
