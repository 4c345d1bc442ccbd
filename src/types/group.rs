//! Event groups for the activity feed
//!
//! An `EventGroup` bundles events that share a grouping criterion (in
//! practice: the same target page). The group keeps whatever order its
//! builder chose; ordering policy lives in the grouper, not here.

use super::event::{Event, EventTime};

/// Error returned when constructing an `EventGroup` from no events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyGroupError;

impl std::fmt::Display for EmptyGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "an event group must contain at least one event")
    }
}

impl std::error::Error for EmptyGroupError {}

/// An immutable, non-empty, ordered bundle of events
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup {
    events: Vec<Event>,
}

impl EventGroup {
    /// Wrap a non-empty event sequence; fails fast on empty input
    pub fn new(events: Vec<Event>) -> Result<Self, EmptyGroupError> {
        if events.is_empty() {
            return Err(EmptyGroupError);
        }
        Ok(Self { events })
    }

    /// The events, in exactly the order given at construction
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the group, yielding its events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Number of events in the group (always at least one)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The most recent `time` among the contained events
    pub fn latest_event_time(&self) -> EventTime {
        self.events
            .iter()
            .map(|e| e.time)
            .max()
            .expect("group contains at least one event")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(id: u64, time: i64) -> Event {
        Event::new(1, 1, EventTime::from_unix(time), "edit").with_id(id)
    }

    #[test]
    fn test_empty_group_rejected() {
        assert_eq!(EventGroup::new(Vec::new()), Err(EmptyGroupError));
    }

    #[test]
    fn test_events_keep_construction_order() {
        let events = vec![event_at(2, 31337), event_at(1, 1337), event_at(3, 7201010)];
        let group = EventGroup::new(events.clone()).unwrap();
        assert_eq!(group.events(), events.as_slice());
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_latest_event_time_is_maximum() {
        let group = EventGroup::new(vec![
            event_at(1, 1337),
            event_at(3, 7201010),
            event_at(2, 31337),
        ])
        .unwrap();
        assert_eq!(group.latest_event_time(), EventTime::from_unix(7201010));
    }

    #[test]
    fn test_singleton_group() {
        let group = EventGroup::new(vec![event_at(9, 10001)]).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.latest_event_time(), EventTime::from_unix(10001));
    }
}
