use infrastructure::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenv::dotenv().ok();

    let config = AppConfig::load("config")?;

    println!(
        "Connecting to {} database...",
        config.database.backend.as_str()
    );
    // connect() applies pending migrations before returning
    infrastructure::connect(&config.database).await?;

    println!("✅ Migrations applied successfully.");

    Ok(())
}
