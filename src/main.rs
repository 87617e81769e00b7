//! Bookstock main entry point
//!
//! This is the command-line interface for the Bookstock catalog
//! inventory valuator.

use bookstock::config::{load_config_with_hash, Config};
use bookstock::crawler::run_valuation;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Bookstock: a catalog inventory valuator
///
/// Bookstock walks a paginated product catalog, visits every item detail
/// page, and prints the total inventory valuation (price × stock summed
/// over all items) to standard output. Diagnostics go to stderr and to a
/// rolling log file under ./logs.
#[derive(Parser, Debug)]
#[command(name = "bookstock")]
#[command(version = "0.1.0")]
#[command(about = "A catalog inventory valuator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity; keep the file writer guard alive
    // for the life of the process
    let _log_guard = setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Run the crawl and print the single result
    match run_valuation(config).await {
        Ok(total) => {
            println!("{}", total);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Valuation run failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Human-readable output goes to stderr; a plain (non-ANSI) copy goes to a
/// rolling file under ./logs so stdout carries nothing but the result.
fn setup_logging(verbose: u8, quiet: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookstock=info,warn"),
            1 => EnvFilter::new("bookstock=debug,info"),
            2 => EnvFilter::new("bookstock=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // The appender needs the target directory to exist
    let _ = std::fs::create_dir_all("logs");
    let file_appender = tracing_appender::rolling::daily("logs", "bookstock.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    guard
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Bookstock Dry Run ===\n");

    println!("Catalog:");
    println!("  Start URL: {}", config.catalog.start_url);
    println!("  Item selector: {}", config.catalog.item_selector);
    println!("  Next-page selector: {}", config.catalog.next_selector);
    println!("  Price selector: {}", config.catalog.price_selector);
    println!("  Stock selector: {}", config.catalog.stock_selector);

    println!("\nHTTP:");
    println!("  User-Agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Max attempts: {}", config.http.max_attempts);
    println!("  Retry backoff: {}ms", config.http.retry_backoff_ms);

    println!("\nThrottle:");
    println!(
        "  Delay between item requests: {}-{}ms",
        config.throttle.min_delay_ms, config.throttle.max_delay_ms
    );

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl the catalog starting at {}", config.catalog.start_url);
}
