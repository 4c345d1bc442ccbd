//! Recent-activity feed assembly
//!
//! Turns flat query results into per-page groups ordered newest first,
//! the shape the feed renders.

mod grouper;

pub use grouper::RecentPageEventGrouper;
