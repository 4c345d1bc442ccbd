//! API module for HTTP endpoints
//!
//! This module provides the REST surface over the activity log: recording
//! events, querying them, and rendering the grouped recent-activity feed.

pub mod http;
pub mod rest;
pub mod state;
