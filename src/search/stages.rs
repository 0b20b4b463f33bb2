//! Matching stages
//!
//! Each stage is one matching strategy in the cascade. A stage returns the
//! positions of the matching items, or `None` when nothing matched, so the
//! engine can move on to the next, more lenient, stage.

use std::fmt;
use std::str::FromStr;

use super::config::MatcherConfig;
use super::distance::distance;
use super::engine::Searchable;
use super::parser::{fold_case, fold_haystack, tokenize, ParsedQuery};

/// One matching strategy in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Case-insensitive equality with the name
    Exact,
    /// Name starts with the query
    Prefix,
    /// Every query token prefixes some token of name, description and creator
    TokenPrefix,
    /// Closest name by edit distance, within the configured threshold
    Fallback,
}

impl Stage {
    /// Strict to lenient
    pub const DEFAULT_ORDER: [Stage; 4] = [
        Stage::Exact,
        Stage::Prefix,
        Stage::TokenPrefix,
        Stage::Fallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Exact => "exact",
            Stage::Prefix => "prefix",
            Stage::TokenPrefix => "token-prefix",
            Stage::Fallback => "fallback",
        }
    }

    /// Run this stage over `items`.
    ///
    /// Returns indices into `items` in result order, or `None` if the stage
    /// produced no matches.
    pub fn run<T: Searchable>(
        &self,
        query: &ParsedQuery,
        items: &[T],
        config: &MatcherConfig,
    ) -> Option<Vec<usize>> {
        let matches = match self {
            Stage::Exact => exact(query, items),
            Stage::Prefix => prefix(query, items),
            Stage::TokenPrefix => token_prefix(query, items),
            Stage::Fallback => fallback(query, items, config),
        };

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Stage::Exact),
            "prefix" => Ok(Stage::Prefix),
            "token-prefix" | "token_prefix" | "token" => Ok(Stage::TokenPrefix),
            "fallback" | "fuzzy" => Ok(Stage::Fallback),
            other => Err(format!(
                "unknown stage '{}', expected one of: exact, prefix, token-prefix, fallback",
                other
            )),
        }
    }
}

fn exact<T: Searchable>(query: &ParsedQuery, items: &[T]) -> Vec<usize> {
    positions(items, |item| fold_case(item.name()) == query.folded)
}

fn prefix<T: Searchable>(query: &ParsedQuery, items: &[T]) -> Vec<usize> {
    positions(items, |item| fold_case(item.name()).starts_with(&query.folded))
}

fn token_prefix<T: Searchable>(query: &ParsedQuery, items: &[T]) -> Vec<usize> {
    if query.tokens.is_empty() {
        return Vec::new();
    }

    positions(items, |item| {
        let haystack = fold_haystack(&item.token_fields());
        let words: Vec<&str> = tokenize(&haystack).collect();
        query
            .tokens
            .iter()
            .all(|token| words.iter().any(|word| word.starts_with(token.as_str())))
    })
}

fn fallback<T: Searchable>(query: &ParsedQuery, items: &[T], config: &MatcherConfig) -> Vec<usize> {
    if config.fallback_max_results == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, usize)> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| (distance(&query.folded, &fold_case(item.name())), idx))
        .filter(|(dist, _)| *dist <= config.fallback_max_distance)
        .collect();

    // Ties keep collection order
    scored.sort_by_key(|&(dist, idx)| (dist, idx));

    scored
        .into_iter()
        .take(config.fallback_max_results)
        .map(|(_, idx)| idx)
        .collect()
}

fn positions<T, F>(items: &[T], predicate: F) -> Vec<usize>
where
    F: Fn(&T) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicate(*item))
        .map(|(idx, _)| idx)
        .collect()
}
