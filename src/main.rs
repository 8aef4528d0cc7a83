//! Cruise-Calendar main entry point
//!
//! This is the command-line interface for the Cruise-Calendar scraper.

use anyhow::Context;
use clap::Parser;
use cruise_calendar::config::{load_config_with_hash, Config, OutputFormat};
use cruise_calendar::output::{compute_statistics, print_statistics, render, write_output};
use cruise_calendar::ScrapeSession;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Cruise-Calendar: which ship visits which port, and when
///
/// Cruise-Calendar reads a cruisetimetables.com destination page, follows
/// every year it links to, and rebuilds the Year -> Month -> Day -> Ships
/// calendar from each year page.
#[derive(Parser, Debug)]
#[command(name = "cruise-calendar")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes cruise port-visit calendars", long_about = None)]
struct Cli {
    /// Landing page, e.g. https://www.cruisetimetables.com/cruises-to-santorini-greece.html
    /// (prompted for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the calendar to this file instead of stdout (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print calendar statistics after scraping
    #[arg(long)]
    stats: bool,

    /// Validate config and URL and show what would be scraped without any network access
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(cli.config.as_deref())?;

    let landing_url = match &cli.url {
        Some(url) => url.trim().to_string(),
        None => prompt_for_url().context("Failed to read landing url from stdin")?,
    };

    if cli.dry_run {
        handle_dry_run(&config, &landing_url)?;
        return Ok(());
    }

    let format = cli.format.unwrap_or(config.output.format);
    let output_path = cli
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));

    let session = ScrapeSession::new(config, &landing_url)?;
    let dataset = session.run().await.context("Scrape failed")?;

    let rendered = render(&dataset, format, &landing_url)?;
    write_output(&rendered, output_path.as_deref())?;
    if let Some(path) = &output_path {
        tracing::info!("Calendar written to {}", path.display());
    }

    if cli.stats {
        print_statistics(&compute_statistics(&dataset));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cruise_calendar=info,warn"),
            1 => EnvFilter::new("cruise_calendar=debug,info"),
            2 => EnvFilter::new("cruise_calendar=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, otherwise the built-in defaults
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using built-in defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Asks for a landing url on stdin
fn prompt_for_url() -> anyhow::Result<String> {
    print!(
        "Please enter a landing url... i.e. https://www.cruisetimetables.com/cruises-to-santorini-greece.html\n> "
    );
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Handles the --dry-run mode: validates config and URL without scraping
fn handle_dry_run(config: &Config, landing_url: &str) -> anyhow::Result<()> {
    println!("=== Cruise-Calendar Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Landing prefix: {}", config.landing_url_prefix());

    println!("\nSelectors:");
    println!("  Year links: {}", config.selectors.year_links);
    println!("  Year content: {}", config.selectors.year_content);
    println!("  Calendar nodes: {}", config.selectors.calendar_nodes);
    println!("  Month class: {}", config.selectors.month_class);
    println!("  Listing day: {}", config.selectors.listing_day);
    println!("  Listing ship: {}", config.selectors.listing_ship);

    println!("\nHTTP:");
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    println!(
        "  Path: {}",
        config.output.path.as_deref().unwrap_or("(stdout)")
    );

    // Same checks a real run performs before its first request
    ScrapeSession::new(config.clone(), landing_url)?;

    println!("\n✓ Configuration is valid");
    println!("✓ Would scrape every year linked from {}", landing_url);

    Ok(())
}
