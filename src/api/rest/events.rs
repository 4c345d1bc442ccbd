//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::store::{EventQuery, SortOrder, TimeLimitComparator};
use crate::types::{Event, EventTime};

/// Body for POST /api/events
#[derive(Debug, Deserialize)]
pub struct RecordEventRequest {
    #[serde(rename = "courseId")]
    pub course_id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// 14-digit `YYYYMMDDHHMMSS` timestamp; defaults to now
    pub time: Option<String>,
    /// Free-form kind tag
    #[serde(rename = "type")]
    pub event_type: String,
    /// Arbitrary auxiliary data
    #[serde(default)]
    pub info: Map<String, Value>,
}

/// POST /api/events - Record a new event
///
/// Returns 201 with the stored event, id assigned.
pub async fn record_event(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecordEventRequest>,
) -> Response {
    let time = match req.time {
        Some(raw) => match EventTime::parse(&raw) {
            Ok(time) => time,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiError::bad_request(e.to_string())),
                )
                    .into_response()
            }
        },
        None => EventTime::now(),
    };

    let event = Event::new(req.course_id, req.user_id, time, req.event_type).with_info(req.info);

    match state.store.insert_event(event) {
        Ok(stored) => (StatusCode::CREATED, Json(ApiResponse::new(stored))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(e.to_string())),
        )
            .into_response(),
    }
}

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Comma-separated course ids
    pub course: Option<String>,
    /// Keep events at or after this 14-digit timestamp
    pub since: Option<String>,
    /// Keep events at or before this 14-digit timestamp
    pub until: Option<String>,
    /// Maximum number of events to return
    pub limit: Option<usize>,
    /// Sort order by time: "asc" or "desc"; omitted = storage order
    pub order: Option<String>,
}

/// GET /api/events - List events with filters
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsParams>,
) -> Response {
    let query = match build_query(&params) {
        Ok(query) => query,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    };

    match state.store.query(&query) {
        Ok(events) => {
            let total = events.len();
            Json(ApiResponse::with_total(events, total)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(e.to_string())),
        )
            .into_response(),
    }
}

/// Translate request parameters into an `EventQuery`
fn build_query(params: &ListEventsParams) -> Result<EventQuery, ApiError> {
    let mut query = EventQuery::new();

    if let Some(raw) = &params.course {
        query = query.with_courses(parse_course_list(raw)?);
    }

    match (&params.since, &params.until) {
        (Some(_), Some(_)) => {
            return Err(ApiError::bad_request("use either since or until, not both"))
        }
        (Some(since), None) => {
            let bound = EventTime::parse(since).map_err(|e| ApiError::bad_request(e.to_string()))?;
            query = query.with_time_limit(bound, TimeLimitComparator::AtOrAfter);
        }
        (None, Some(until)) => {
            let bound = EventTime::parse(until).map_err(|e| ApiError::bad_request(e.to_string()))?;
            query = query.with_time_limit(bound, TimeLimitComparator::AtOrBefore);
        }
        (None, None) => {}
    }

    if let Some(limit) = params.limit {
        query = query.with_row_limit(limit);
    }

    query = match params.order.as_deref() {
        None => query,
        Some("asc") => query.with_sort_order(SortOrder::TimeAsc),
        Some("desc") => query.with_sort_order(SortOrder::TimeDesc),
        Some(other) => {
            return Err(ApiError::bad_request(format!(
                "unknown order {:?}, expected asc or desc",
                other
            )))
        }
    };

    Ok(query)
}

fn parse_course_list(raw: &str) -> Result<Vec<u64>, ApiError> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| ApiError::bad_request(format!("invalid course id: {:?}", part)))
        })
        .collect()
}
