//! Pokedex - an interactive location-area browser
//!
//! Pages through the PokeAPI location-area listing and explores individual
//! areas, memoizing raw responses in an expiring in-memory cache.

use std::io;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{CommandRegistry, Config, PokeClient, Repl};

/// Main entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the API client and its response cache
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the cache reaper and wait for it to exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_interval={}ms, page_size={}",
        config.api_url, config.cache_interval_ms, config.page_size
    );

    let client = PokeClient::from_config(&config).context("failed to create API client")?;
    let mut repl = Repl::new(client, CommandRegistry::new());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl.run(stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    let stats = repl.client().cache().stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        swept = stats.swept,
        hit_rate = stats.hit_rate(),
        "cache statistics"
    );

    repl.shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}
