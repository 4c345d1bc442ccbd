//! Recent-activity feed endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::feed::RecentPageEventGrouper;
use crate::store::{EventQuery, SortOrder};
use crate::types::{Event, EventGroup, EventTime};

/// Query parameters for the feed
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Restrict to one course
    pub course: Option<u64>,
    /// Cap on the number of events fed into grouping
    pub limit: Option<usize>,
}

/// One group in the rendered feed
#[derive(Debug, Serialize)]
pub struct FeedGroup {
    /// Target page shared by the group's events, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "latestEventTime")]
    pub latest_event_time: EventTime,
    pub events: Vec<Event>,
}

impl FeedGroup {
    fn from_group(group: EventGroup) -> Self {
        let latest_event_time = group.latest_event_time();
        let page = group
            .events()
            .first()
            .and_then(|e| e.page_name())
            .map(str::to_string);
        Self {
            page,
            latest_event_time,
            events: group.into_events(),
        }
    }
}

/// GET /api/feed - Grouped recent activity, most recently active page first
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Response {
    let mut query = EventQuery::new().with_sort_order(SortOrder::TimeDesc);
    if let Some(course) = params.course {
        query = query.with_course(course);
    }
    if let Some(limit) = params.limit {
        query = query.with_row_limit(limit);
    }

    let events = match state.store.query(&query) {
        Ok(events) => events,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(e.to_string())),
            )
                .into_response()
        }
    };

    let groups = RecentPageEventGrouper::new().group_events(&events);
    let total = groups.len();
    let feed: Vec<FeedGroup> = groups.into_iter().map(FeedGroup::from_group).collect();

    Json(ApiResponse::with_total(feed, total)).into_response()
}
