use serde::Serialize;
use thiserror::Error;

use crate::model::bar::DailySeries;

/// Placeholder confidence, not derived from the data.
pub const FORECAST_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastResult {
    pub prediction: bool,
    pub confidence: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("Failed to fetch stock data")]
    Fetch,

    #[error("Prediction failed: {0}")]
    Internal(String),
}

/// Directional guess: up when the last close sits above the series mean.
pub fn forecast(fetched: Option<&DailySeries>) -> Result<ForecastResult, ForecastError> {
    let series = fetched.filter(|s| !s.is_empty()).ok_or(ForecastError::Fetch)?;

    let last = series
        .last_close()
        .ok_or_else(|| ForecastError::Internal("daily series has no closing price".to_string()))?;
    let avg = series
        .mean_close()
        .ok_or_else(|| ForecastError::Internal("daily series has no mean close".to_string()))?;

    Ok(ForecastResult {
        prediction: last > avg,
        confidence: FORECAST_CONFIDENCE,
    })
}
