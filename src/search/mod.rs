//! Tiered search over catalog entries
//!
//! Matching relaxes step by step: exact name, name prefix, token prefixes
//! over name/description/creator, then closest name by edit distance.

pub mod config;
pub mod distance;
pub mod engine;
pub mod parser;
pub mod stages;

#[cfg(test)]
mod property_tests;

pub use config::MatcherConfig;
pub use distance::distance;
pub use engine::{search, SearchEngine, SearchResult, Searchable};
pub use parser::{ParsedQuery, QueryParser};
pub use stages::Stage;
