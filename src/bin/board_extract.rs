use std::time::Duration;

use board_extract::{fetch_listing, scrape, HttpFetcher, Options, ScrapeOutcome, ScrapeRequest};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "board-extract",
    about = "Extract posts from a bulletin board listing page",
    version
)]
struct Cli {
    /// Listing page URL
    url: String,

    /// Earliest accepted post date (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Latest accepted post date (YYYY-MM-DD)
    #[arg(long)]
    date_end: Option<String>,

    /// Maximum number of detail pages to fetch
    #[arg(short = 'n', long, default_value_t = 30)]
    max_posts: usize,

    /// Detail pages fetched at the same time
    #[arg(short, long, default_value_t = 1)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Minimum pause between requests in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Only extract the listing page, without fetching detail pages
    #[arg(long)]
    listing_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout_secs);

    let options = Options {
        max_posts: cli.max_posts,
        concurrency: cli.concurrency,
        fetch_timeout: timeout,
        ..Options::default()
    };
    let fetcher = HttpFetcher::builder()
        .timeout(timeout)
        .delay(Duration::from_millis(cli.delay_ms))
        .build()?;

    let request = ScrapeRequest {
        url: cli.url,
        date: cli.date,
        date_end: cli.date_end,
    };

    let (output, failed) = if cli.listing_only {
        match fetch_listing(&fetcher, &request, &options).await {
            Ok(listing) => (serde_json::to_value(&listing)?, false),
            Err(e) => {
                error!(error = %e, "listing extraction failed");
                (serde_json::json!({ "error": e.to_string() }), true)
            }
        }
    } else {
        let outcome = ScrapeOutcome::from(scrape(&fetcher, &request, &options).await);
        if let ScrapeOutcome::Failure { error } = &outcome {
            error!(error = %error, "scrape failed");
        }
        let failed = matches!(outcome, ScrapeOutcome::Failure { .. });
        (serde_json::to_value(&outcome)?, failed)
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
