//! Event store statistics
//!
//! Summary numbers over the activity log: how many events, of which
//! types, how large the log file is, and the last id handed out.

use std::collections::HashMap;
use std::fs;

use serde::Serialize;

use super::store::{EventStore, EventStoreResult};

/// Statistics about the event store
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventStoreStats {
    /// Total number of decodable events in the log
    pub event_count: usize,
    /// Event counts keyed by type tag
    pub events_by_type: HashMap<String, usize>,
    /// Size of the log file in bytes
    pub log_size: u64,
    /// Highest id assigned so far (0 if nothing was inserted)
    pub last_event_id: u64,
}

impl EventStoreStats {
    /// Format size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.2} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.2} KB", bytes as f64 / KB as f64)
        } else {
            format!("{} B", bytes)
        }
    }
}

impl EventStore {
    /// Collect statistics over the current log
    pub fn stats(&self) -> EventStoreResult<EventStoreStats> {
        let events = self.load_events()?;

        let mut events_by_type: HashMap<String, usize> = HashMap::new();
        for event in &events {
            *events_by_type.entry(event.event_type.clone()).or_insert(0) += 1;
        }

        let log_size = fs::metadata(self.config().events_path())
            .map(|m| m.len())
            .unwrap_or(0);

        Ok(EventStoreStats {
            event_count: events.len(),
            events_by_type,
            log_size,
            last_event_id: self.next_event_id().saturating_sub(1),
        })
    }
}
