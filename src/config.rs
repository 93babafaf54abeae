use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Exchange suffix appended to instrument codes, e.g. ".KS" for KOSPI.
    pub market_suffix: String,
    pub range: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Lookback ranges the chart endpoint accepts for daily bars.
const SUPPORTED_RANGES: &[&str] = &["1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "max"];

impl ProviderConfig {
    pub fn validate_range(&self) -> Result<()> {
        if !SUPPORTED_RANGES.contains(&self.range.as_str()) {
            bail!(
                "invalid provider.range '{}': expected one of {}",
                self.range,
                SUPPORTED_RANGES.join("/")
            );
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;

        config
            .provider
            .validate_range()
            .context("provider.range is invalid")?;
        if config.provider.timeout_secs == 0 {
            bail!("provider.timeout_secs must be > 0");
        }

        Ok(config)
    }
}
