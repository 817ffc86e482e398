use anyhow::Result;
use application::SoilMate;
use clap::Parser;
use console::Console;
use dotenv::dotenv;
use infrastructure::AppConfig;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,
}

async fn run() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr so they don't interleave with the menu
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,console=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    info!("🌾 SoilMate Console Starting...");

    let config = AppConfig::load(&args.config_dir)?;
    let db = infrastructure::connect(&config.database).await?;
    println!("✅ Connected to SoilMate Database!");

    let app = SoilMate::new(db, config.recommendation);
    let mut console = Console::new(app, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await
}

fn main() {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run()) {
        eprintln!("\n❌ CRITICAL ERROR: {:?}", e);
        std::process::exit(1);
    }
}
