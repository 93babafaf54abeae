use anyhow::Result;

use stock_analysis::api;
use stock_analysis::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .init();

    tracing::info!(
        bind_addr = %config.server.bind_addr,
        provider_url = %config.provider.base_url,
        range = %config.provider.range,
        "Starting stock-analysis"
    );

    api::serve(&config).await
}
