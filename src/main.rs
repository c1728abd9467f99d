//! Pokedex - An interactive shell over the PokeAPI catalog

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{cli, App, Config, ExpiringCache, PokeApiClient, ReadThrough};

/// Entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so the prompt stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweep task
/// 4. Run the REPL on stdin/stdout until `exit`, EOF or Ctrl+C
/// 5. Stop the cache sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}, http_timeout={}s",
        config.cache_ttl, config.api_base_url, config.http_timeout
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let cache = Arc::new(ExpiringCache::new(config.cache_lifetime()));
    let mut app = App::new(Arc::new(client), ReadThrough::new(cache.clone()));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let (outcome, interrupted) = tokio::select! {
        result = cli::run(&mut app, stdin, &mut stdout) => (result, false),
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            println!();
            (Ok(()), true)
        }
    };

    cache.stop().await;
    info!("Pokedex shutdown complete");
    outcome.context("shell I/O failed")?;

    if interrupted {
        // The blocking stdin reader would otherwise hold runtime shutdown
        std::process::exit(0);
    }
    Ok(())
}
