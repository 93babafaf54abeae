use serde::Serialize;
use thiserror::Error;

use crate::model::bar::DailySeries;

use super::delta::{compute_deltas, DeltaRow};
use super::resample::{resample, Granularity};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodChange {
    pub increase: Option<f64>,
    pub increase_rate: Option<f64>,
}

/// Latest monthly and weekly change plus the current price. Derived per
/// request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub monthly: PeriodChange,
    pub weekly: PeriodChange,
    pub current_price: f64,
}

/// The messages here are the API's error payloads verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Failed to fetch stock data")]
    Fetch,

    #[error("Failed to calculate monthly data")]
    Monthly,

    #[error("Failed to calculate weekly data")]
    Weekly,

    #[error("Analysis failed: {0}")]
    Internal(String),
}

/// Build the analysis summary from an already-fetched daily series.
///
/// The series is fetched once by the caller and reused for both cadences.
/// `current_price` comes from the last daily bar, not from a resampled row.
pub fn build_summary(fetched: Option<&DailySeries>) -> Result<AnalysisSummary, AnalysisError> {
    let series = fetched.filter(|s| !s.is_empty()).ok_or(AnalysisError::Fetch)?;

    let monthly = latest_delta(series, Granularity::Monthly).ok_or(AnalysisError::Monthly)?;
    let weekly = latest_delta(series, Granularity::Weekly).ok_or(AnalysisError::Weekly)?;

    let current_price = series.last_close().ok_or_else(|| {
        AnalysisError::Internal("daily series has no closing price".to_string())
    })?;

    Ok(AnalysisSummary {
        monthly: PeriodChange {
            increase: monthly.increase,
            increase_rate: monthly.increase_rate,
        },
        weekly: PeriodChange {
            increase: weekly.increase,
            increase_rate: weekly.increase_rate,
        },
        current_price,
    })
}

fn latest_delta(series: &DailySeries, granularity: Granularity) -> Option<DeltaRow> {
    let rows = resample(series, granularity);
    compute_deltas(&rows).pop()
}
