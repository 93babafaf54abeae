use chrono::NaiveDate;
use serde::Serialize;

use super::resample::ResampledRow;

/// A resampled row extended with its change versus the preceding row.
/// `None` marks an undefined delta: the first row has no prior, and a rate
/// over a zero prior close is undefined rather than infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeltaRow {
    pub bucket_end: NaiveDate,
    pub close: f64,
    pub increase: Option<f64>,
    pub increase_rate: Option<f64>,
}

/// One output row per input row, in order.
pub fn compute_deltas(rows: &[ResampledRow]) -> Vec<DeltaRow> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let prior = if i > 0 { Some(rows[i - 1].close) } else { None };
            let increase = prior.map(|p| row.close - p);
            let increase_rate = prior.and_then(|p| {
                if p == 0.0 {
                    None
                } else {
                    Some((row.close / p - 1.0) * 100.0)
                }
            });
            DeltaRow {
                bucket_end: row.bucket_end,
                close: row.close,
                increase,
                increase_rate,
            }
        })
        .collect()
}
