//! Persistence for the activity log
//!
//! This module provides the storage boundary of the engine:
//! - `EventStore`: append-only JSONL log with insert and query
//! - `EventQuery`: per-read specification (filters, order, row limit)
//! - `EventStoreStats`: summary numbers over the log
//!
//! # Architecture
//!
//! ```text
//! Write path:
//! ┌──────────┐    ┌──────────────┐    ┌───────────────┐
//! │ producer │───►│ assign id    │───►│ append + fsync│
//! │ Event    │    │ (counter)    │    │ events.jsonl  │
//! └──────────┘    └──────────────┘    └───────────────┘
//!
//! Read path:
//! ┌──────────────┐    ┌────────────────────┐    ┌──────────┐
//! │ EventQuery   │───►│ filter → sort →    │───►│ Vec<Event>│
//! │ (spec object)│    │ truncate           │    └──────────┘
//! └──────────────┘    └────────────────────┘
//! ```

mod query;
mod stats;
mod store;

pub use query::{EventQuery, SortOrder, TimeLimitComparator};
pub use stats::EventStoreStats;
pub use store::{EventStore, EventStoreConfig, EventStoreError, EventStoreResult};
