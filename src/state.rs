// src/state.rs
use crate::services::stats_store::StatsStore;
use crate::services::usage_stats::UsageStats;

/// Everything a session mutates or persists. Owned by the session loop.
#[derive(Debug)]
pub struct AppState {
    pub stats: UsageStats,
    pub store: StatsStore,
}

impl AppState {
    pub fn new(stats: UsageStats, store: StatsStore) -> Self {
        Self { stats, store }
    }
}
