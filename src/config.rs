// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STATS_FILE: &str = "ai_assistant_stats.json";

/// Runtime knobs for a session. The binary always runs with the defaults.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub stats_path: PathBuf,
    /// Dots printed by the processing animation.
    pub processing_steps: usize,
    pub processing_step_delay: Duration,
    pub processing_final_delay: Duration,
    pub startup_pause: Duration,
    pub invalid_choice_pause: Duration,
    pub error_pause: Duration,
    pub clear_screen: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            processing_steps: 3,
            processing_step_delay: Duration::from_millis(500),
            processing_final_delay: Duration::from_millis(500),
            startup_pause: Duration::from_secs(1),
            invalid_choice_pause: Duration::from_secs(2),
            error_pause: Duration::from_secs(2),
            clear_screen: true,
        }
    }
}

impl AssistantConfig {
    /// No delays and no screen clearing; output stays readable in a buffer.
    pub fn instant(stats_path: impl Into<PathBuf>) -> Self {
        Self {
            stats_path: stats_path.into(),
            processing_step_delay: Duration::ZERO,
            processing_final_delay: Duration::ZERO,
            startup_pause: Duration::ZERO,
            invalid_choice_pause: Duration::ZERO,
            error_pause: Duration::ZERO,
            clear_screen: false,
            ..Self::default()
        }
    }
}
