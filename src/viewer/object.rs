//! Basic data structures used by the viewer.

use chrono::NaiveDate;

use super::constant::Period;

/// One daily OHLCV record
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    /// Create a new PriceBar
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Whether the bar closed at or above its open
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Time-ordered daily price history for one ticker.
///
/// Bars are sorted ascending by date with no duplicate dates. The series is
/// built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    ticker: String,
    period: Period,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, sorting by date. For a repeated date the last bar supplied wins.
    pub fn new(ticker: impl Into<String>, period: Period, bars: Vec<PriceBar>) -> Self {
        let mut indexed: Vec<(usize, PriceBar)> = bars.into_iter().enumerate().collect();
        indexed.sort_by(|a, b| a.1.date.cmp(&b.1.date).then(a.0.cmp(&b.0)));

        let mut ordered: Vec<PriceBar> = Vec::with_capacity(indexed.len());
        for (_, bar) in indexed {
            match ordered.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => ordered.push(bar),
            }
        }

        Self {
            ticker: ticker.into(),
            period,
            bars: ordered,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices in date order
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.close)
    }

    /// Close of the most recent bar
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }

    pub fn max_close(&self) -> Option<f64> {
        self.closes().reduce(f64::max)
    }

    pub fn min_close(&self) -> Option<f64> {
        self.closes().reduce(f64::min)
    }
}

/// Request sent to a datafeed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryRequest {
    pub ticker: String,
    pub period: Period,
}

impl HistoryRequest {
    /// Create a new HistoryRequest
    pub fn new(ticker: impl Into<String>, period: Period) -> Self {
        Self {
            ticker: ticker.into(),
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        PriceBar::new(date, close, close + 1.0, close - 1.0, close, 1_000)
    }

    #[test]
    fn test_series_sorted_and_deduplicated() {
        let series = PriceSeries::new(
            "AAPL",
            Period::Month1,
            vec![bar(5, 3.0), bar(1, 1.0), bar(3, 2.0), bar(3, 2.5)],
        );

        let dates: Vec<u32> = series.bars().iter().map(|b| chrono::Datelike::day(&b.date)).collect();
        assert_eq!(dates, vec![1, 3, 5]);
        assert_eq!(series.bars()[1].close, 2.5);
    }

    #[test]
    fn test_close_statistics() {
        let series = PriceSeries::new(
            "AAPL",
            Period::Year1,
            vec![bar(1, 10.00), bar(2, 12.50), bar(3, 9.75)],
        );

        assert_eq!(series.last_close(), Some(9.75));
        assert_eq!(series.max_close(), Some(12.50));
        assert_eq!(series.min_close(), Some(9.75));
    }

    #[test]
    fn test_empty_series_statistics() {
        let series = PriceSeries::new("AAPL", Period::Day1, Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert_eq!(series.max_close(), None);
        assert_eq!(series.min_close(), None);
    }

    #[test]
    fn test_bar_direction() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(PriceBar::new(date, 10.0, 11.0, 9.0, 10.0, 0).is_up());
        assert!(!PriceBar::new(date, 10.0, 11.0, 9.0, 9.5, 0).is_up());
    }
}
