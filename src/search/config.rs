//! Matcher configuration
//!
//! Stage order and the fallback stage's tuning constants.

use super::stages::Stage;

/// Configuration for the stage cascade
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Stages tried in order until one produces results
    pub stages: Vec<Stage>,
    /// Largest edit distance the fallback stage accepts
    pub fallback_max_distance: usize,
    /// How many closest names the fallback stage may return
    pub fallback_max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            stages: Stage::DEFAULT_ORDER.to_vec(),
            fallback_max_distance: 2,
            fallback_max_results: 1,
        }
    }
}

impl MatcherConfig {
    /// Replace the stage order. An empty list keeps the current one.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        if !stages.is_empty() {
            self.stages = stages;
        }
        self
    }

    pub fn with_fallback(mut self, max_distance: usize, max_results: usize) -> Self {
        self.fallback_max_distance = max_distance;
        self.fallback_max_results = max_results;
        self
    }
}
