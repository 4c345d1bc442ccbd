//! Query specification for the activity log
//!
//! An `EventQuery` describes one filtered/sorted/limited read. It is built
//! by the caller, handed to [`EventStore::query`](super::EventStore::query)
//! and discarded. Every filter is optional; the empty query matches all
//! stored events.

use serde::{Deserialize, Serialize};

use crate::types::{Event, EventTime};

/// How a time bound constrains matching events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLimitComparator {
    /// Keep events with `time >= bound`
    AtOrAfter,
    /// Keep events with `time <= bound`
    AtOrBefore,
}

impl TimeLimitComparator {
    /// Whether `time` satisfies the bound under this comparator
    pub fn matches(self, time: EventTime, bound: EventTime) -> bool {
        match self {
            TimeLimitComparator::AtOrAfter => time >= bound,
            TimeLimitComparator::AtOrBefore => time <= bound,
        }
    }
}

/// Result ordering for a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Storage-natural order (insertion order for the log)
    #[default]
    None,
    /// Ascending by event time
    TimeAsc,
    /// Descending by event time
    TimeDesc,
}

/// Specification for one read against the activity log
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    course_ids: Vec<u64>,
    time_limit: Option<(EventTime, TimeLimitComparator)>,
    row_limit: Option<usize>,
    sort_order: SortOrder,
}

impl EventQuery {
    /// An empty query: matches every stored event
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on a single course; shorthand for `with_courses([id])`
    pub fn with_course(self, id: u64) -> Self {
        self.with_courses([id])
    }

    /// Filter on a set of courses, replacing any prior course filter
    ///
    /// The ids are stored sorted and deduplicated. An empty iterator clears
    /// the filter.
    pub fn with_courses<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        let mut ids: Vec<u64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        self.course_ids = ids;
        self
    }

    /// Keep only events on the given side of `bound`
    pub fn with_time_limit(mut self, bound: EventTime, comparator: TimeLimitComparator) -> Self {
        self.time_limit = Some((bound, comparator));
        self
    }

    /// Cap the result count; unset means unlimited
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = Some(limit);
        self
    }

    /// Order the results
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// The normalized course-id set (empty when unfiltered)
    pub fn course_ids(&self) -> &[u64] {
        &self.course_ids
    }

    /// The time bound, when set
    pub fn time_limit(&self) -> Option<EventTime> {
        self.time_limit.map(|(bound, _)| bound)
    }

    /// The comparator attached to the time bound, when set
    pub fn time_limit_comparator(&self) -> Option<TimeLimitComparator> {
        self.time_limit.map(|(_, comparator)| comparator)
    }

    /// The row cap, when set
    pub fn row_limit(&self) -> Option<usize> {
        self.row_limit
    }

    /// The requested ordering
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether an event satisfies the course and time filters
    pub fn matches(&self, event: &Event) -> bool {
        if !self.course_ids.is_empty() && self.course_ids.binary_search(&event.course_id).is_err()
        {
            return false;
        }
        if let Some((bound, comparator)) = self.time_limit {
            if !comparator.matches(event.time, bound) {
                return false;
            }
        }
        true
    }

    /// Sort events in place per the requested order
    ///
    /// The sort is stable, so events with equal times keep their relative
    /// storage order.
    pub fn sort_events(&self, events: &mut [Event]) {
        match self.sort_order {
            SortOrder::None => {}
            SortOrder::TimeAsc => events.sort_by(|a, b| a.time.cmp(&b.time)),
            SortOrder::TimeDesc => events.sort_by(|a, b| b.time.cmp(&a.time)),
        }
    }
}
