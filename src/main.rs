//! Course Activity Server - Binary Entry Point
//!
//! This is the main entry point for the activity-server binary.

use std::sync::Arc;

use course_activity::api::http::create_router;
use course_activity::api::state::AppState;
use course_activity::store::{EventStore, EventStoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EventStoreConfig::from_env();
    let store = EventStore::open(config)?;

    println!("Event log: {}", store.config().events_path().display());

    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = create_router(state);

    let addr =
        std::env::var("ACTIVITY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down");
}
