use anyhow::{Context, Result};
use chrono::DateTime;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::AppError;
use crate::model::bar::{DailyBar, DailySeries};

use super::types::ChartResponse;

pub struct YahooRestClient {
    http: reqwest::Client,
    base_url: String,
    market_suffix: String,
    range: String,
}

impl YahooRestClient {
    pub fn new(
        base_url: &str,
        market_suffix: &str,
        range: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build chart HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            market_suffix: market_suffix.to_string(),
            range: range.to_string(),
        })
    }

    pub fn from_config(cfg: &ProviderConfig) -> Result<Self> {
        Self::new(
            &cfg.base_url,
            &cfg.market_suffix,
            &cfg.range,
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    /// Full provider symbol for an instrument code, e.g. "005930" -> "005930.KS".
    pub fn provider_symbol(&self, code: &str) -> String {
        format!("{}{}", code.trim(), self.market_suffix)
    }

    /// Fetch the configured range of daily bars for an instrument code.
    ///
    /// Every transport, decoding, or provider failure collapses to `None`
    /// here, as does an empty series; callers only distinguish "got bars"
    /// from "no data". Failures are logged. No retries.
    pub async fn fetch_daily(&self, code: &str) -> Option<DailySeries> {
        match self.try_fetch_daily(code).await {
            Ok(series) if !series.is_empty() => Some(series),
            Ok(_) => {
                tracing::warn!(code, "chart endpoint returned no bars");
                None
            }
            Err(e) => {
                tracing::warn!(code, error = %format!("{:#}", e), "failed to fetch daily bars");
                None
            }
        }
    }

    async fn try_fetch_daily(&self, code: &str) -> Result<DailySeries> {
        let symbol = self.provider_symbol(code);
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let chart: ChartResponse = self
            .http
            .get(&url)
            .query(&[("range", self.range.as_str()), ("interval", "1d")])
            .send()
            .await
            .context("chart request failed")?
            .error_for_status()
            .context("chart endpoint returned error status")?
            .json()
            .await
            .context("chart JSON parse failed")?;

        if let Some(err) = chart.chart.error {
            return Err(AppError::Provider {
                code: err.code,
                description: err.description,
            }
            .into());
        }

        let Some(result) = chart.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(DailySeries::default());
        };
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
                continue;
            };
            // Null slots mark sessions without trade data; skip the whole bar.
            let (Some(open), Some(high), Some(low), Some(close)) = (
                value_at(&quote.open, i),
                value_at(&quote.high, i),
                value_at(&quote.low, i),
                value_at(&quote.close, i),
            ) else {
                continue;
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);
            bars.push(DailyBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(DailySeries::from_bars(bars))
    }
}

fn value_at(values: &[Option<f64>], idx: usize) -> Option<f64> {
    values.get(idx).copied().flatten()
}
