//! Marquee CLI
//!
//! Runs the movie API server and answers one-off catalog queries from the
//! terminal.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use marquee_api::{ApiConfig, ApiServer, AppState};
use marquee_catalog::SearchQuery;

/// Marquee - caching movie metadata proxy
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on (falls back to the configured port)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// List movie genres
    Genres,

    /// List watch providers for the configured region
    Providers,

    /// Search movies
    Search {
        /// Search text
        query: String,
        /// Keep only movies of this genre id
        #[arg(short, long)]
        genre: Option<String>,
        /// Keep only movies offered by this provider id
        #[arg(short, long)]
        ott: Option<String>,
    },

    /// Show one movie with its release date and trailer
    Detail {
        /// Upstream movie id
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "marquee=debug,info"
    } else {
        "marquee=info,warn"
    };
    let fmt_layer = if cli.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt_layer)
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(config, port, &bind).await,
        Commands::Genres => cmd_genres(config).await,
        Commands::Providers => cmd_providers(config).await,
        Commands::Search { query, genre, ott } => cmd_search(config, query, genre, ott).await,
        Commands::Detail { id } => cmd_detail(config, id).await,
    }
}

/// Run API server
async fn cmd_serve(config: ApiConfig, port: Option<u16>, bind: &str) -> Result<()> {
    let port = port.unwrap_or(config.port);

    println!("{}", "🎬 Starting Marquee API server...".cyan().bold());
    println!("   {} http://{}:{}/api/movies", "Listening on:".green(), bind, port);
    println!("   {} http://{}:{}/api/health", "Health check:".dimmed(), bind, port);
    println!(
        "   {} {}s",
        "Cache TTL:".dimmed(),
        config.cache.default_ttl_seconds
    );
    println!("\n   Press Ctrl+C to stop.\n");

    let server = ApiServer::new(config).context("Failed to create API server")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", bind, port))?;
    server.run(addr).await.context("Server error")?;

    Ok(())
}

/// List genres
async fn cmd_genres(config: ApiConfig) -> Result<()> {
    println!("{}", "🎭 Fetching genres...".cyan().bold());

    let state = build_state(config)?;
    let genres = state.catalog.genres().await.context("Failed to load genres")?;

    print_json("Genres:", &genres)
}

/// List providers
async fn cmd_providers(config: ApiConfig) -> Result<()> {
    let region = config.catalog.locale.region.clone();
    println!("{} {}", "📺 Fetching providers for region".cyan().bold(), region);

    let state = build_state(config)?;
    let providers = state
        .catalog
        .providers()
        .await
        .context("Failed to load providers")?;

    print_json("Providers:", &providers)
}

/// Search movies
async fn cmd_search(
    config: ApiConfig,
    query: String,
    genre: Option<String>,
    ott: Option<String>,
) -> Result<()> {
    println!("{} {}", "🔍 Searching:".cyan().bold(), query);

    let state = build_state(config)?;
    let search = SearchQuery {
        query: Some(query),
        genre,
        provider: ott,
    };
    let results = state.catalog.search(&search).await.context("Search failed")?;

    let count = results["total_results"].as_u64().unwrap_or(0);
    print_json(&format!("{} result(s):", count), &results["results"])
}

/// Show movie detail
async fn cmd_detail(config: ApiConfig, id: u64) -> Result<()> {
    println!("{} {}", "🎞️  Loading movie".cyan().bold(), id);

    let state = build_state(config)?;
    let detail = state
        .catalog
        .detail(id)
        .await
        .with_context(|| format!("Failed to load movie {}", id))?;

    if detail["trailer"].is_null() {
        println!("   {}", "No trailer available".dimmed());
    }
    print_json("Detail:", &detail)
}

fn build_state(config: ApiConfig) -> Result<AppState> {
    AppState::new(config).context("Failed to create upstream client")
}

fn print_json(header: &str, value: &Value) -> Result<()> {
    println!("\n{}", header.green().bold());
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
