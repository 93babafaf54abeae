use chrono::{Datelike, Days, Months, NaiveDate};

use crate::model::bar::DailySeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Monthly,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampledRow {
    pub bucket_end: NaiveDate,
    pub close: f64,
}

/// Downsample a daily series to one row per calendar bucket, keeping the
/// chronologically last close observed in each bucket. Buckets with no bars
/// produce no row (no forward-fill). Rows come out ascending by bucket end.
///
/// Monthly buckets are calendar months labeled with the month's last day.
/// Weekly buckets are ISO weeks (Monday through Sunday) labeled with the
/// week's Sunday.
pub fn resample(series: &DailySeries, granularity: Granularity) -> Vec<ResampledRow> {
    let mut rows: Vec<ResampledRow> = Vec::new();
    for bar in series.bars() {
        let bucket_end = match granularity {
            Granularity::Monthly => month_end(bar.date),
            Granularity::Weekly => week_end(bar.date),
        };
        match rows.last_mut() {
            // Series is ascending, so bars of one bucket are adjacent.
            Some(last) if last.bucket_end == bucket_end => last.close = bar.close,
            _ => rows.push(ResampledRow {
                bucket_end,
                close: bar.close,
            }),
        }
    }
    rows
}

/// Last calendar day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

/// Sunday of the ISO week (Monday through Sunday) containing `date`.
fn week_end(date: NaiveDate) -> NaiveDate {
    let to_sunday = 6 - u64::from(date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(to_sunday)).unwrap_or(date)
}
