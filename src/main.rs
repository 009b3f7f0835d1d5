use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pubg_stats_gql::api::state::AppState;
use pubg_stats_gql::api::{build_router, GRAPHQL_PATH};
use pubg_stats_gql::config::{AppConfig, API_KEY_ENV};
use pubg_stats_gql::gql::{build_schema, schema_sdl};

#[derive(Parser)]
#[command(name = "pubg-stats-gql")]
#[command(about = "GraphQL gateway over the PUBG statistics API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); defaults to the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the GraphQL schema (SDL) and exit
    Schema,
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?.with_env_overrides();

    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_tracing(&level, cli.json_logs);

    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!("Starting pubg-stats-gql v{}", env!("CARGO_PKG_VERSION"));

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            if config.upstream.api_key.is_none() {
                tracing::warn!(
                    "{} is not set; every query will fail with a missing credential error",
                    API_KEY_ENV
                );
            }
            tracing::info!("Upstream: {}", config.upstream.base_url);

            let state = AppState::new(&config)?;
            let schema = build_schema(state.clone());
            let app = build_router(state, schema);

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("GraphQL: http://{}{}", addr, GRAPHQL_PATH);
            axum::serve(listener, app).await?;
        }
        Commands::Schema => {
            println!("{}", schema_sdl());
        }
    }

    Ok(())
}
