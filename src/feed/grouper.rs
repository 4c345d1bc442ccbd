//! Grouping of events by target page for the recent-activity feed

use std::collections::HashMap;

use crate::types::{Event, EventGroup};

/// Partitions a flat event sequence into per-page groups ordered for a
/// "recent activity" feed
///
/// Events sharing an `info["page"]` value collapse into one group; an
/// event without a page forms its own singleton group and is never merged
/// with anything, not even another page-less event. Members inside a group
/// are ordered newest first; groups themselves are ordered by their most
/// recent member, most recently active page first. Both orderings are
/// stable, so ties keep their input order.
///
/// The grouper is pure and holds no state; one instance can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecentPageEventGrouper;

impl RecentPageEventGrouper {
    pub fn new() -> Self {
        Self
    }

    /// Group events by page identity and order them for the feed
    ///
    /// Empty input yields an empty vector; a single event yields a single
    /// singleton group.
    pub fn group_events(&self, events: &[Event]) -> Vec<EventGroup> {
        // Partition, keeping first-seen bucket order
        let mut buckets: Vec<Vec<Event>> = Vec::new();
        let mut bucket_by_page: HashMap<String, usize> = HashMap::new();

        for event in events {
            match event.page_name() {
                Some(page) => {
                    if let Some(&index) = bucket_by_page.get(page) {
                        buckets[index].push(event.clone());
                    } else {
                        bucket_by_page.insert(page.to_string(), buckets.len());
                        buckets.push(vec![event.clone()]);
                    }
                }
                // No page key: always a fresh singleton bucket
                None => buckets.push(vec![event.clone()]),
            }
        }

        let mut groups: Vec<EventGroup> = buckets
            .into_iter()
            .map(|mut bucket| {
                // Newest member first; stable, so same-time events keep
                // their input order
                bucket.sort_by(|a, b| b.time.cmp(&a.time));
                EventGroup::new(bucket).expect("bucket holds at least one event")
            })
            .collect();

        // Most recently active page first
        groups.sort_by(|a, b| b.latest_event_time().cmp(&a.latest_event_time()));

        groups
    }
}
