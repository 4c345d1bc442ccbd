//! Event types for the activity log
//!
//! This module defines the core event record used by the append-only
//! activity log. Events are immutable once written; the store assigns the
//! id on insert and nothing mutates them afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::utils::time::{current_timestamp, format_timestamp, parse_timestamp, ParseTimestampError};

/// An instant on the activity timeline
///
/// Held in memory as Unix seconds so comparisons are plain integer
/// comparisons. On the wire and on disk it is the 14-digit
/// `YYYYMMDDHHMMSS` UTC string of the stored record format; parsing
/// happens once at that boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTime(i64);

impl EventTime {
    /// Create from Unix seconds
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    /// The instant as Unix seconds
    pub fn as_unix(self) -> i64 {
        self.0
    }

    /// The current instant
    pub fn now() -> Self {
        Self(current_timestamp())
    }

    /// Parse the 14-digit `YYYYMMDDHHMMSS` form
    pub fn parse(s: &str) -> Result<Self, ParseTimestampError> {
        parse_timestamp(s).map(Self)
    }
}

impl std::fmt::Display for EventTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match format_timestamp(self.0) {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match format_timestamp(self.0) {
            Some(s) => serializer.serialize_str(&s),
            None => Err(serde::ser::Error::custom(format!(
                "timestamp out of calendar range: {}",
                self.0
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EventTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One recorded activity: who did what, against which course, when
///
/// The `info` bag carries whatever auxiliary data the producer attaches.
/// Presentation code keys off well-known entries such as `info["page"]`
/// (target page name) and `info["parent"]` (parent event reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique id, assigned by the store on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Course the activity belongs to
    #[serde(rename = "courseId")]
    pub course_id: u64,

    /// Acting user
    #[serde(rename = "userId")]
    pub user_id: u64,

    /// When the activity happened
    pub time: EventTime,

    /// Free-form kind tag, e.g. `"edit"` or `"enroll"`
    #[serde(rename = "type")]
    pub event_type: String,

    /// Arbitrary auxiliary data (may contain nested structures)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub info: Map<String, Value>,
}

impl Event {
    /// Create a new unpersisted event with an empty info bag
    pub fn new(
        course_id: u64,
        user_id: u64,
        time: EventTime,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            course_id,
            user_id,
            time,
            event_type: event_type.into(),
            info: Map::new(),
        }
    }

    /// Attach an info bag
    pub fn with_info(mut self, info: Map<String, Value>) -> Self {
        self.info = info;
        self
    }

    /// Set the id (used by the store when the row is persisted)
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Seconds elapsed since the event happened, computed on demand
    pub fn age(&self) -> i64 {
        current_timestamp() - self.time.as_unix()
    }

    /// Target page name from `info["page"]`, when present and a string
    pub fn page_name(&self) -> Option<&str> {
        self.info.get("page").and_then(Value::as_str)
    }

    /// Serialize to a JSON string (one JSONL row)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string (one JSONL row)
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
