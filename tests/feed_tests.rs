//! Integration tests for the recent-activity feed
//!
//! Runs the full pipeline: insert into the store, query time-descending,
//! group with `RecentPageEventGrouper`, and check both ordering levels.

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;

use course_activity::{
    Event, EventGroup, EventQuery, EventStore, EventStoreConfig, EventTime,
    RecentPageEventGrouper, SortOrder,
};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_data_dir() -> std::path::PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::path::PathBuf::from(format!("target/test_feed_{}_{}", std::process::id(), id))
}

fn cleanup_dir(path: &std::path::Path) {
    let _ = fs::remove_dir_all(path);
}

fn page_event(time: i64, page: &str) -> Event {
    let mut info = serde_json::Map::new();
    info.insert("page".to_string(), json!(page));
    Event::new(1, 1, EventTime::from_unix(time), "edit").with_info(info)
}

fn member_ids(group: &EventGroup) -> Vec<u64> {
    group.events().iter().filter_map(|e| e.id).collect()
}

#[test]
fn test_store_to_feed_pipeline() {
    let data_dir = test_data_dir();
    let store = EventStore::open(EventStoreConfig::new(&data_dir)).expect("Failed to open store");

    // Page "Nyan": ids 1..=3, page "Onoez": ids 4..=6
    for event in [
        page_event(1337, "Nyan"),
        page_event(31337, "Nyan"),
        page_event(7201010, "Nyan"),
        page_event(10003, "Onoez"),
        page_event(10001, "Onoez"),
        page_event(10002, "Onoez"),
    ] {
        store.insert_event(event).unwrap();
    }

    let events = store
        .query(&EventQuery::new().with_sort_order(SortOrder::TimeDesc))
        .unwrap();

    let groups = RecentPageEventGrouper::new().group_events(&events);
    assert_eq!(groups.len(), 2);

    // Nyan's latest activity (7201010) beats Onoez's (10003)
    assert_eq!(member_ids(&groups[0]), vec![3, 2, 1]);
    assert_eq!(member_ids(&groups[1]), vec![4, 6, 5]);
    assert_eq!(groups[0].latest_event_time(), EventTime::from_unix(7201010));
    assert_eq!(groups[1].latest_event_time(), EventTime::from_unix(10003));

    cleanup_dir(&data_dir);
}

#[test]
fn test_grouping_is_insensitive_to_query_order() {
    let data_dir = test_data_dir();
    let store = EventStore::open(EventStoreConfig::new(&data_dir)).expect("Failed to open store");

    for event in [
        page_event(1337, "Nyan"),
        page_event(31337, "Nyan"),
        page_event(7201010, "Nyan"),
    ] {
        store.insert_event(event).unwrap();
    }

    let grouper = RecentPageEventGrouper::new();

    let ascending = store
        .query(&EventQuery::new().with_sort_order(SortOrder::TimeAsc))
        .unwrap();
    let natural = store.query(&EventQuery::new()).unwrap();

    for events in [ascending, natural] {
        let groups = grouper.group_events(&events);
        assert_eq!(groups.len(), 1);
        assert_eq!(member_ids(&groups[0]), vec![3, 2, 1]);
    }

    cleanup_dir(&data_dir);
}

#[test]
fn test_events_without_pages_stay_singletons() {
    let data_dir = test_data_dir();
    let store = EventStore::open(EventStoreConfig::new(&data_dir)).expect("Failed to open store");

    // Two enrollments with no page key plus one page edit
    store
        .insert_event(Event::new(1, 5, EventTime::from_unix(200), "enroll"))
        .unwrap();
    store
        .insert_event(Event::new(1, 6, EventTime::from_unix(300), "enroll"))
        .unwrap();
    store.insert_event(page_event(100, "Nyan")).unwrap();

    let events = store
        .query(&EventQuery::new().with_sort_order(SortOrder::TimeDesc))
        .unwrap();
    let groups = RecentPageEventGrouper::new().group_events(&events);

    assert_eq!(groups.len(), 3);
    assert_eq!(member_ids(&groups[0]), vec![2]);
    assert_eq!(member_ids(&groups[1]), vec![1]);
    assert_eq!(member_ids(&groups[2]), vec![3]);

    cleanup_dir(&data_dir);
}

#[test]
fn test_feed_respects_row_limit_before_grouping() {
    let data_dir = test_data_dir();
    let store = EventStore::open(EventStoreConfig::new(&data_dir)).expect("Failed to open store");

    for time in [10, 20, 30, 40] {
        store.insert_event(page_event(time, "Nyan")).unwrap();
    }
    store.insert_event(page_event(5, "Onoez")).unwrap();

    // Limiting to the three newest events drops "Onoez" entirely
    let events = store
        .query(
            &EventQuery::new()
                .with_sort_order(SortOrder::TimeDesc)
                .with_row_limit(3),
        )
        .unwrap();
    let groups = RecentPageEventGrouper::new().group_events(&events);

    assert_eq!(groups.len(), 1);
    assert_eq!(member_ids(&groups[0]), vec![4, 3, 2]);

    cleanup_dir(&data_dir);
}
