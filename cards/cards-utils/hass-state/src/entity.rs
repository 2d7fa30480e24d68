use card_format::parse_metric;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub const LAST_SEEN_ATTRIBUTE: &str = "last_seen";
pub const WORKER_NAME_ATTRIBUTE: &str = "worker_name";

/// Latest known value of a single host entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    /// Raw state text as published by the sensor (e.g. "1520000000000")
    #[serde(deserialize_with = "state_text")]
    pub state: String,

    /// Free-form attributes; the cards read `last_seen` and `worker_name`
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Hosts publish state as text, but hand-written fixtures often use bare numbers.
fn state_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl EntityState {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// State parsed as a number; `None` for placeholders like "unavailable".
    pub fn numeric_state(&self) -> Option<f64> {
        parse_metric(&self.state)
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    pub fn worker_name(&self) -> Option<&str> {
        self.attribute_str(WORKER_NAME_ATTRIBUTE)
            .filter(|name| !name.is_empty())
    }

    pub fn last_seen(&self) -> LastSeen {
        LastSeen::from_attribute(self.attributes.get(LAST_SEEN_ATTRIBUTE))
    }
}

/// The `last_seen` attribute of a worker entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSeen {
    /// No attribute, or an empty, null, false or zero one
    Absent,
    At(DateTime<Utc>),
    /// Present but not a timestamp we can read
    Invalid,
}

impl LastSeen {
    pub fn from_attribute(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => LastSeen::Absent,
            Some(Value::String(raw)) if raw.trim().is_empty() => LastSeen::Absent,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => LastSeen::Absent,
            Some(Value::String(raw)) => match parse_timestamp(raw) {
                Some(ts) => LastSeen::At(ts),
                None => {
                    debug!("Unreadable last_seen timestamp: {}", raw);
                    LastSeen::Invalid
                }
            },
            Some(other) => {
                debug!("Unexpected last_seen value: {}", other);
                LastSeen::Invalid
            }
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            LastSeen::At(ts) => Some(*ts),
            LastSeen::Absent | LastSeen::Invalid => None,
        }
    }
}

impl From<DateTime<Utc>> for LastSeen {
    fn from(ts: DateTime<Utc>) -> Self {
        LastSeen::At(ts)
    }
}

impl From<Option<DateTime<Utc>>> for LastSeen {
    fn from(ts: Option<DateTime<Utc>>) -> Self {
        ts.map_or(LastSeen::Absent, LastSeen::At)
    }
}

/// Parse an ISO-8601 timestamp. Timestamps without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
