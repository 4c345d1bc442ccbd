//! Shared application state for the HTTP handlers

use std::sync::Arc;

use crate::store::EventStore;

/// State shared by all request handlers
pub struct AppState {
    /// The event store
    pub store: Arc<EventStore>,
}

impl AppState {
    /// Create a new AppState over the given store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}
