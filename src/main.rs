//! Followrank main entry point
//!
//! This is the command-line interface for the followrank tool.

use clap::Parser;
use followrank::api::{ApiClient, API_FOLLOWER_LIMIT, MAX_PAGE_SIZE};
use followrank::cache::CacheStore;
use followrank::config::FetchOptions;
use followrank::fetch::download;
use followrank::score::calculate_score;
use tracing_subscriber::EnvFilter;

/// Followrank: SoundCloud follower ranking
///
/// Resolves a username, retrieves up to the API cap of followers, and
/// computes the sum of each follower's follower/following ratio.
#[derive(Parser, Debug)]
#[command(name = "followrank")]
#[command(version = "1.0.0")]
#[command(about = "SoundCloud follower ranking", long_about = None)]
struct Cli {
    /// SoundCloud username to rank
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Number of items per result set (max. 200)
    #[arg(
        short = 'l',
        long = "limit",
        default_value_t = MAX_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    limit: u32,

    /// Maximum number of followers to retrieve (max. 8200)
    #[arg(
        short = 'm',
        long = "max_followers",
        default_value_t = API_FOLLOWER_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_followers: u32,

    /// Disable caching
    #[arg(short = 'n', long = "no-cache")]
    no_cache: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        eprintln!("* {}", e);
        std::process::exit(1);
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("followrank=info,warn"),
            1 => EnvFilter::new("followrank=debug,info"),
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

/// Sequences cache-check, resolve, fetch, cache-save, score, and report
async fn run(cli: Cli) -> anyhow::Result<()> {
    println!("SoundCloud Follower Ranking\n---");

    let options = FetchOptions::new(cli.limit, cli.max_followers, !cli.no_cache).clamped();
    tracing::debug!(?options, "effective fetch options");

    let cache = CacheStore::new(".", options.caching);
    let client = ApiClient::new()?;

    let data = download(&client, &cache, &options, &cli.username).await?;
    let report = calculate_score(&data);

    if report.skipped_zero_followings > 0 {
        println!(
            "Skipped {} followers with zero followings",
            report.skipped_zero_followings
        );
    }
    println!("User score: {}", report.score.trunc() as i64);

    Ok(())
}
