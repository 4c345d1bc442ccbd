//! Course Activity Engine
//!
//! Records activity events against courses, persists them in an
//! append-only JSON-lines log, and aggregates them into per-page groups
//! for a "recent activity" feed.
//!
//! # Features
//!
//! - **Append-only log**: events are written once with fsync, never mutated
//! - **Query DSL**: course filter, inclusive time bound, row limit, sort order
//! - **Feed grouping**: per-page groups ordered by recency, newest member first
//! - **Fault isolation**: one malformed stored row never fails a query batch
//! - **REST surface**: record, list, feed, and stats endpoints over Axum
//!
//! # Modules
//!
//! - `types`: Core value objects (Event, EventTime, EventGroup)
//! - `store`: Persistence boundary (EventStore, EventQuery, stats)
//! - `feed`: Grouping algorithm for the recent-activity feed
//! - `api`: HTTP surface over the store
//! - `utils`: Timestamp utilities
//!
//! # Example
//!
//! ```no_run
//! use course_activity::{
//!     Event, EventQuery, EventStore, EventStoreConfig, EventTime,
//!     RecentPageEventGrouper, SortOrder,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EventStore::open(EventStoreConfig::new("data"))?;
//!
//!     let event = Event::new(7, 23, EventTime::now(), "edit");
//!     store.insert_event(event)?;
//!
//!     let query = EventQuery::new()
//!         .with_course(7)
//!         .with_sort_order(SortOrder::TimeDesc);
//!     let events = store.query(&query)?;
//!
//!     let groups = RecentPageEventGrouper::new().group_events(&events);
//!     for group in groups {
//!         println!("{}: {} events", group.latest_event_time(), group.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod feed;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use feed::RecentPageEventGrouper;
pub use store::{
    EventQuery, EventStore, EventStoreConfig, EventStoreError, EventStoreResult, EventStoreStats,
    SortOrder, TimeLimitComparator,
};
pub use types::{EmptyGroupError, Event, EventGroup, EventTime};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
