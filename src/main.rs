//! catalog-search CLI (Rust)
//!
//! Loads a static JSON catalog once per session and filters it with a
//! tiered matcher:
//! - `search --query <Q>` runs a single query
//! - `interactive` runs one query per stdin line until EOF

mod cli;

use anyhow::Result;
use catalog_search::dataset::{Dataset, Record};
use catalog_search::error::{validate_query, AppError};
use catalog_search::render;
use catalog_search::search::SearchEngine;
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, SessionOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Commands::Search(args) => execute_search_cli(args).await,
        Commands::Interactive(args) => execute_interactive_cli(args).await,
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Execute search command in CLI mode
async fn execute_search_cli(args: cli::SearchArgs) -> Result<(), AppError> {
    validate_query(&args.query)?;

    let dataset = load_dataset(&args.options).await?;
    let engine = SearchEngine::with_config(args.options.matcher_config());

    let output = run_query(&engine, &dataset, &args.query, &args.options)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Execute interactive command in CLI mode
async fn execute_interactive_cli(args: cli::InteractiveArgs) -> Result<(), AppError> {
    let dataset = load_dataset(&args.options).await?;
    let engine = SearchEngine::with_config(args.options.matcher_config());

    info!(
        "Ready: {} records from {}. Enter one query per line, Ctrl+D to quit.",
        dataset.len(),
        dataset.source()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if let Err(e) = validate_query(&line) {
            warn!("{}", e);
            continue;
        }

        let output = run_query(&engine, &dataset, &line, &args.options)?;
        if !output.is_empty() {
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
    }

    debug!("stdin closed, leaving interactive mode");
    Ok(())
}

/// Load the catalog, degrading to an empty one unless `--strict` is set
async fn load_dataset(options: &SessionOptions) -> Result<Dataset, AppError> {
    if options.strict {
        Dataset::load(&options.data, options.timeout()).await
    } else {
        Ok(Dataset::load_or_empty(&options.data, options.timeout()).await)
    }
}

fn run_query(
    engine: &SearchEngine,
    dataset: &Dataset,
    query: &str,
    options: &SessionOptions,
) -> Result<String, AppError> {
    let result = engine.search(query, dataset.records());
    if let Some(stage) = result.stage {
        info!("{} result(s) for {:?} ({} match)", result.len(), query, stage);
    }

    render_results(query, &result.items, options)
}

fn render_results(
    query: &str,
    results: &[&Record],
    options: &SessionOptions,
) -> Result<String, AppError> {
    match options.format {
        OutputFormat::Markdown => Ok(render::render_markdown(
            query,
            results,
            &options.render_options(),
        )),
        OutputFormat::Json => render::render_json(results)
            .map_err(|e| AppError::Internal(format!("Failed to serialize results: {}", e))),
    }
}
