//! CLI mode implementation
//!
//! Provides the command-line interface and turns flags into matcher,
//! loader and rendering configuration.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use catalog_search::dataset::DataSource;
use catalog_search::render::{RenderOptions, DEFAULT_LINK_NAME};
use catalog_search::search::{MatcherConfig, Stage};

/// catalog-search CLI
#[derive(Parser, Debug)]
#[command(name = "catalog-search")]
#[command(about = "Search a static JSON catalog with tiered matching", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single query and print the results
    Search(SearchArgs),
    /// Read one query per line from stdin and print results for each
    Interactive(InteractiveArgs),
}

/// Search command arguments
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search terms (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    #[command(flatten)]
    pub options: SessionOptions,
}

/// Interactive command arguments
#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub options: SessionOptions,
}

/// Options shared by every command that loads the catalog
#[derive(Args, Debug, Clone)]
pub struct SessionOptions {
    /// Dataset path or http(s) URL
    #[arg(short = 'd', long, env = "CATALOG_DATA", default_value = "data.json")]
    pub data: DataSource,

    /// Seconds allowed for loading the dataset
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fail instead of continuing with an empty catalog when loading fails
    #[arg(long)]
    pub strict: bool,

    /// Comma-separated stage order (exact, prefix, token-prefix, fallback)
    #[arg(long, value_delimiter = ',')]
    pub stages: Vec<Stage>,

    /// Largest edit distance accepted by the fallback stage
    #[arg(long, default_value_t = 2)]
    pub max_distance: usize,

    /// Number of closest names the fallback stage may return
    #[arg(long, default_value_t = 1)]
    pub max_fallback_results: usize,

    /// Entry name rendered as a hyperlink to its link
    #[arg(long, default_value = DEFAULT_LINK_NAME)]
    pub link_name: String,

    /// Disable the hyperlinked entry
    #[arg(long, conflicts_with = "link_name")]
    pub no_link: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl SessionOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::default()
            .with_stages(self.stages.clone())
            .with_fallback(self.max_distance, self.max_fallback_results)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            link_name: if self.no_link {
                None
            } else {
                Some(self.link_name.clone())
            },
        }
    }
}
