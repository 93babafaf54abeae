use chrono::NaiveDate;

/// One daily OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Daily bars for one instrument, strictly ascending by date with unique dates.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    bars: Vec<DailyBar>,
}

impl DailySeries {
    /// Build a series from raw bars. Bars are sorted ascending by date; when
    /// a date appears more than once the last bar wins.
    pub fn from_bars(mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        let mut deduped: Vec<DailyBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(prev) if prev.date == bar.date => *prev = bar,
                _ => deduped.push(bar),
            }
        }
        Self { bars: deduped }
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close of the chronologically last bar.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Arithmetic mean of all closes.
    pub fn mean_close(&self) -> Option<f64> {
        if self.bars.is_empty() {
            return None;
        }
        let sum: f64 = self.bars.iter().map(|b| b.close).sum();
        Some(sum / self.bars.len() as f64)
    }
}
