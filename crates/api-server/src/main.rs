use anyhow::Result;
use api_server::{api, setup_app_state};
use application::SoilMate;
use clap::Parser;
use infrastructure::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override the configured API port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,api_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("🌾 SoilMate API Starting...");

    let mut config = AppConfig::load(&args.config_dir)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // 0. Connect to Database and apply migrations
    let db = infrastructure::connect(&config.database).await?;

    // 1. Wire use cases
    let app = SoilMate::new(db, config.recommendation);
    let state = setup_app_state(app.farmers);

    // 2. Start API Server
    let cors = api::cors_layer(&config.server.cors_origin)?;
    let router = api::create_router(state, cors);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(cors_origin = %config.server.cors_origin, "🚀 API Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
