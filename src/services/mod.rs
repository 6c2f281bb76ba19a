pub mod feedback;
pub mod replies;
pub mod responder;
pub mod stats_store;
pub mod usage_stats;
