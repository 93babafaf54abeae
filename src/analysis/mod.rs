pub mod delta;
pub mod forecast;
pub mod resample;
pub mod summary;

pub use delta::{compute_deltas, DeltaRow};
pub use forecast::{forecast, ForecastError, ForecastResult};
pub use resample::{resample, Granularity, ResampledRow};
pub use summary::{build_summary, AnalysisError, AnalysisSummary};
