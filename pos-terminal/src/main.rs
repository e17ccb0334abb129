mod config;
mod console;
mod logger;
mod screens;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref())?;

    println!("\n🍽  Table Orders");
    println!("================");
    println!("Service: {}\n", config.client.base_url);
    tracing::info!(url = %config.client.base_url, "POS terminal starting");

    // 2. Dashboard <-> Order screen loop until stdin closes
    if let Err(e) = screens::run(&config).await {
        tracing::error!("Terminal error: {}", e);
        return Err(e);
    }

    tracing::info!("POS terminal stopped");
    Ok(())
}
