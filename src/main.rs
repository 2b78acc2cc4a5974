//! moh-scraper main entry point
//!
//! This is the command-line interface for the ministry of health scraper.

use anyhow::Context;
use clap::Parser;
use moh_scraper::config::{load_config_with_hash, Config};
use moh_scraper::crawler::{run_scraper, user_agent_string, Category};
use moh_scraper::output::{print_statistics, DatasetStatistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// moh-scraper: maps a health ministry's web presence for EHR planning
///
/// Discovers the links on the configured home page, crawls them one
/// category at a time, and writes the dataset, per-category CSV tables and
/// an EHR insights report.
#[derive(Parser, Debug)]
#[command(name = "moh-scraper")]
#[command(version)]
#[command(about = "Health ministry web scraper for EHR planning", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).with_context(|| format!("loading {}", cli.config.display()));
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(&config, &config_hash, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("moh_scraper=info,warn"),
            1 => EnvFilter::new("moh_scraper=debug,info"),
            2 => EnvFilter::new("moh_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the configuration and the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== moh-scraper Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  Root URL: {}", config.scraper.root_url);
    println!("  Phase delay: {}ms", config.scraper.phase_delay_ms);
    println!("  Request timeout: {}s", config.scraper.request_timeout_secs);

    println!("\nUser Agent:");
    println!("  {}", user_agent_string(&config.user_agent));

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    match &config.output.summary_path {
        Some(path) => println!("  Summary: {}", path),
        None => println!("  Summary: (none)"),
    }

    println!("\nCrawl phases:");
    for category in Category::CRAWLED {
        println!("  - {}: {}", category, category.crawl_keywords().join(", "));
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: &Config, config_hash: &str, quiet: bool) -> anyhow::Result<()> {
    let (outcome, files) = match run_scraper(config, config_hash).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error during scraping: {}", e);
            return Err(e).context("scrape failed, no output written");
        }
    };

    tracing::info!("{} files written", files.len());

    if !quiet {
        println!();
        print_statistics(&DatasetStatistics::collect(
            &outcome.dataset,
            outcome.links.len(),
        ));

        println!("\n=== EHR Development Insights ===");
        println!(
            "Found {} regulatory documents",
            outcome.insights.regulatory_requirements.len()
        );
        println!(
            "Identified facility types: {}",
            outcome.insights.facility_types.join(", ")
        );
        println!("\nFiles written:");
        for path in &files {
            println!("  {}", path.display());
        }
    }

    Ok(())
}
