//! Dealer-Reviews command-line entry point
//!
//! A thin wrapper over the library: loads configuration, applies flag
//! overrides, runs the pipeline and prints the ranked reviews.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dealer_reviews::config::{load_config, Config};
use dealer_reviews::{collect_top_reviews, Review, SortOrder};

/// Scrape and rank dealership customer reviews
#[derive(Parser, Debug)]
#[command(name = "dealer-reviews")]
#[command(version)]
#[command(about = "Scrape and rank dealership customer reviews", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of review pages to scan
    #[arg(long)]
    pages: Option<u32>,

    /// Number of ranked reviews to return
    #[arg(long)]
    count: Option<usize>,

    /// Dealership review URL to scrape
    #[arg(long)]
    url: Option<String>,

    /// Sort direction for the ranked reviews
    #[arg(long, value_enum)]
    sort: Option<SortOrder>,

    /// Emit the ranked reviews as JSON instead of text lines
    #[arg(long)]
    json: bool,

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

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);
    anyhow::ensure!(config.scraper.pages >= 1, "pages must be at least 1");

    let reviews = collect_top_reviews(&config).await?;

    if cli.json {
        print_json(&reviews)?;
    } else {
        print_text(&reviews);
    }

    Ok(())
}

/// Sets up the tracing subscriber from the explicit verbosity flags
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dealer_reviews=info,warn"),
            1 => EnvFilter::new("dealer_reviews=debug,info"),
            2 => EnvFilter::new("dealer_reviews=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(pages) = cli.pages {
        config.scraper.pages = pages;
    }
    if let Some(count) = cli.count {
        config.scraper.count = count;
    }
    if let Some(url) = &cli.url {
        config.scraper.dealership_url = url.clone();
    }
    if let Some(sort) = cli.sort {
        config.scraper.sort = sort;
    }
}

fn print_text(reviews: &[Review]) {
    println!("###");
    for review in reviews {
        println!("{review}");
    }
    println!("###");
}

fn print_json(reviews: &[Review]) -> anyhow::Result<()> {
    let records: Vec<serde_json::Value> = reviews
        .iter()
        .map(|review| {
            serde_json::json!({
                "reviewer": review.reviewer(),
                "score": review.score(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
