//! Data types for the course activity engine
//!
//! This module contains the core value objects: the event record itself,
//! its instant type, and the feed-facing event group.

mod event;
mod group;

pub use event::{Event, EventTime};
pub use group::{EmptyGroupError, EventGroup};
