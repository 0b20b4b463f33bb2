//! Search Engine Integration
//!
//! Runs the configured stages in order and stops at the first one that
//! produces results. Stages are never merged.

use tracing::debug;

use super::config::MatcherConfig;
use super::parser::QueryParser;
use super::stages::Stage;

/// Anything the engine can match against
pub trait Searchable {
    /// Field used by the exact, prefix and fallback stages
    fn name(&self) -> &str;

    /// Fields joined into the token-prefix haystack, in order
    fn token_fields(&self) -> [&str; 3];
}

/// Items matched by a search, borrowed from the searched collection
#[derive(Debug)]
pub struct SearchResult<'a, T> {
    /// Matched items in result order
    pub items: Vec<&'a T>,
    /// Stage that produced the items, `None` when nothing matched
    pub stage: Option<Stage>,
}

impl<'a, T> SearchResult<'a, T> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            stage: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Search engine running the stage cascade
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: MatcherConfig,
}

impl SearchEngine {
    /// Create a new search engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create search engine with custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Search `items` for `query`.
    ///
    /// An empty query matches nothing. Otherwise each stage runs in the
    /// configured order and the first non-empty result is returned.
    pub fn search<'a, T: Searchable>(&self, query: &str, items: &'a [T]) -> SearchResult<'a, T> {
        let parsed = QueryParser::parse(query);
        if parsed.is_empty() {
            return SearchResult::empty();
        }

        for stage in &self.config.stages {
            if let Some(indices) = stage.run(&parsed, items, &self.config) {
                debug!(
                    "Query {:?} matched {} of {} items at stage {}",
                    parsed.original,
                    indices.len(),
                    items.len(),
                    stage
                );
                return SearchResult {
                    items: indices.into_iter().map(|idx| &items[idx]).collect(),
                    stage: Some(*stage),
                };
            }
        }

        debug!("Query {:?} matched nothing", parsed.original);
        SearchResult::empty()
    }
}

/// Search with the default configuration
pub fn search<'a, T: Searchable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    SearchEngine::new().search(query, items).items
}
