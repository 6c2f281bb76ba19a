// src/services/stats_store.rs
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use super::usage_stats::UsageStats;
use crate::error::StatsError;

/// JSON file holding `UsageStats` between runs.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is a first run and yields the defaults.
    pub async fn load(&self) -> Result<UsageStats, StatsError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stats file yet");
                return Ok(UsageStats::default());
            }
            Err(source) => {
                return Err(StatsError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stats: UsageStats =
            serde_json::from_str(&raw).map_err(|source| StatsError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), total_queries = stats.total_queries, "stats loaded");
        Ok(stats)
    }

    /// Startup load: a bad file is reported on `out` and the session starts from zero.
    pub async fn load_or_report(&self, out: &mut impl Write) -> UsageStats {
        match self.load().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "using empty stats");
                let _ = writeln!(out, "⚠️  Could not load stats: {e}");
                UsageStats::default()
            }
        }
    }

    /// Overwrites the file with the current counters.
    pub async fn save(&self, stats: &UsageStats) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(stats).map_err(|e| StatsError::Unwritable {
            path: self.path.clone(),
            source: e.into(),
        })?;

        fs::write(&self.path, json)
            .await
            .map_err(|source| StatsError::Unwritable {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), total_queries = stats.total_queries, "stats saved");
        Ok(())
    }
}
