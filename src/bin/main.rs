//! Stock Analysis Agent entry point
//!
//! Ticker validation and placeholder recommendation service.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use stock_analysis::config::AppConfig;
use stock_analysis::engine::AnalysisEngine;
use stock_analysis::handler::{create_router, AppState};
use stock_analysis::{validation, DataServiceClient, AGENT_ID, AGENT_VERSION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stock-analyze")]
#[command(about = "Stock Analysis Agent - ticker validation and recommendations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000", env = "PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Analyze a single ticker locally and print the response
    Analyze {
        /// Ticker symbol (1-5 uppercase letters)
        #[arg(short, long)]
        ticker: String,
    },

    /// Ping the configured data service once
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            // Missing DATABASE_URL is fatal; an unreachable data service is not.
            let config = AppConfig::from_env()?;
            let client = DataServiceClient::new(&config.database_url, config.ping_timeout_ms);

            let database_connected = match client.ping().await {
                Ok(()) => {
                    tracing::info!(url = %client.base_url(), "Data service reachable");
                    true
                }
                Err(e) => {
                    tracing::warn!(url = %client.base_url(), error = %e, "Data service ping failed; serving anyway");
                    false
                }
            };

            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            let state = Arc::new(AppState::new(database_connected));
            let router = create_router(state);

            tracing::info!("Starting Stock Analysis Agent on {}", addr);
            tracing::info!("Agent ID: {}, Version: {}", AGENT_ID, AGENT_VERSION);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, router).await?;
        }

        Commands::Analyze { ticker } => {
            let body = serde_json::json!({ "ticker": ticker });
            match validation::validate(&body) {
                Ok(request) => {
                    let engine = AnalysisEngine::new();
                    let response = engine.analyze(&request);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Ping => {
            let config = AppConfig::from_env()?;
            let client = DataServiceClient::new(&config.database_url, config.ping_timeout_ms);

            match client.ping().await {
                Ok(()) => {
                    println!(
                        "{}",
                        serde_json::json!({ "url": client.base_url(), "database": "connected" })
                    );
                }
                Err(e) => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "url": client.base_url(),
                            "database": "disconnected",
                            "error": e.to_string(),
                        })
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
