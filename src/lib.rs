pub mod api;
pub mod config;
pub mod models;
pub mod store;

pub use config::Config;
pub use store::Store;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("serve" | "-s" | "--serve") => serve(config).await,

        Some("init" | "--init") => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        Some("help" | "-h" | "--help") => {
            print_help();
            Ok(())
        }

        Some(other) => {
            println!("Unknown command: {}", other);
            println!();
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("Omikuji - Fortune Cookie Server");
    println!("Serves a fortune catalog and per-user saved fortunes over HTTP");
    println!();
    println!("USAGE:");
    println!("  omikuji [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("  serve             Start the API server (default)");
    println!("  init              Create default config file");
    println!("  help              Show this help message");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to configure the port, CORS origins, etc.");
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!(
        "Omikuji v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let store = if config.catalog.seed {
        Store::seeded().await
    } else {
        Store::new()
    };
    info!("Catalog holds {} fortunes", store.catalog.len().await);

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let state = api::create_app_state(config, store);
    let app = api::router(state).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🥠 API server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
