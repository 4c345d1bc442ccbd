//! Event store - append-only activity log
//!
//! The `EventStore` persists events as JSON lines in a single log file and
//! answers [`EventQuery`] reads over it. It holds no per-call state beyond
//! the id counter; concurrent callers rely on the filesystem's own
//! guarantees, and the store neither locks across calls nor retries.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::types::Event;

use super::query::EventQuery;

/// Row count above which query scans filter in parallel
const PARALLEL_SCAN_THRESHOLD: usize = 1000;

/// Configuration for the EventStore
#[derive(Debug, Clone)]
pub struct EventStoreConfig {
    /// Path to the data directory
    pub data_dir: PathBuf,
}

impl Default for EventStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl EventStoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Create config from the environment, honoring `EVENT_LOG_DIR`
    pub fn from_env() -> Self {
        match env::var("EVENT_LOG_DIR") {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to events.jsonl
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join("events.jsonl")
    }
}

/// Result type for EventStore operations
pub type EventStoreResult<T> = Result<T, EventStoreError>;

/// Errors that can occur in EventStore operations
#[derive(Debug)]
pub enum EventStoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidEvent(String),
}

impl std::fmt::Display for EventStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStoreError::Io(e) => write!(f, "IO error: {}", e),
            EventStoreError::Json(e) => write!(f, "JSON error: {}", e),
            EventStoreError::InvalidEvent(msg) => write!(f, "Invalid event: {}", msg),
        }
    }
}

impl std::error::Error for EventStoreError {}

impl From<std::io::Error> for EventStoreError {
    fn from(e: std::io::Error) -> Self {
        EventStoreError::Io(e)
    }
}

impl From<serde_json::Error> for EventStoreError {
    fn from(e: serde_json::Error) -> Self {
        EventStoreError::Json(e)
    }
}

/// Append-only event log with filtered/sorted/limited reads
pub struct EventStore {
    config: EventStoreConfig,
    /// Next event id to assign
    next_id: Mutex<u64>,
}

impl EventStore {
    /// Open the store, seeding the id counter from any existing log
    ///
    /// Rows that fail to decode are skipped with a warning, the same as
    /// during queries; they never block opening the store.
    pub fn open(config: EventStoreConfig) -> EventStoreResult<Self> {
        let store = Self {
            config,
            next_id: Mutex::new(1),
        };

        let max_id = store
            .load_events()?
            .iter()
            .filter_map(|e| e.id)
            .max()
            .unwrap_or(0);
        *store.next_id.lock() = max_id + 1;

        Ok(store)
    }

    /// Get the configuration
    pub fn config(&self) -> &EventStoreConfig {
        &self.config
    }

    /// Get the next event id (without incrementing)
    pub fn next_event_id(&self) -> u64 {
        *self.next_id.lock()
    }

    /// Persist an event, assigning it the next unique id
    ///
    /// Any id already present on the event is replaced; the store owns id
    /// assignment. The row is appended atomically with fsync. I/O and
    /// serialization failures propagate to the caller; there is no retry
    /// at this layer.
    pub fn insert_event(&self, event: Event) -> EventStoreResult<Event> {
        let events_path = self.config.events_path();

        // Ensure parent directory exists
        if let Some(parent) = events_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // The counter lock also serializes appends, so a row and its id
        // can never race another insert.
        let mut next_id = self.next_id.lock();
        let stored = event.with_id(*next_id);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&events_path)?;

        let json_line = stored.to_json_line()?;
        writeln!(file, "{}", json_line)?;

        // Sync to disk for durability
        file.sync_all()?;

        *next_id += 1;

        Ok(stored)
    }

    /// Execute a query: filter, sort, then truncate
    ///
    /// Returns fully-populated events (ids set). An empty result is an
    /// empty vector, never an error.
    pub fn query(&self, query: &EventQuery) -> EventStoreResult<Vec<Event>> {
        let events = self.load_events()?;

        // Parallel scan for large logs, sequential below the threshold
        let mut matching: Vec<Event> = if events.len() > PARALLEL_SCAN_THRESHOLD {
            events.into_par_iter().filter(|e| query.matches(e)).collect()
        } else {
            events.into_iter().filter(|e| query.matches(e)).collect()
        };

        query.sort_events(&mut matching);

        if let Some(limit) = query.row_limit() {
            matching.truncate(limit);
        }

        Ok(matching)
    }

    /// Load all events from the log
    ///
    /// A row that fails to decode is reported and skipped; one bad row
    /// never aborts the batch.
    pub fn load_events(&self) -> EventStoreResult<Vec<Event>> {
        let events_path = self.config.events_path();

        if !events_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&events_path)?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            match Event::from_json_line(&line) {
                Ok(event) => events.push(event),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse event at line {}: {}",
                        line_num + 1,
                        e
                    );
                    // Continue loading other events
                }
            }
        }

        Ok(events)
    }
}
