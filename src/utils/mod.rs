//! Utility functions and helpers
//!
//! This module contains timestamp utilities shared by the stored record
//! format and the API layer.

pub mod time;

pub use time::{current_timestamp, format_timestamp, parse_timestamp, ParseTimestampError};
