use chrono::{DateTime, Utc};
use core_types::Candle;

/// An ordered, immutable sequence of candles for one symbol.
///
/// Invariant: strictly increasing `open_time`, no duplicate timestamps.
/// Established once in [`TimeSeries::from_candles`]; afterwards the series
/// is read-only and the store replaces it wholesale on refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    candles: Vec<Candle>,
}

impl TimeSeries {
    /// Builds a series from candles in arbitrary order.
    ///
    /// Records are stable-sorted by open time; when several records share a
    /// timestamp the last-seen one wins, reflecting the most recent refetch
    /// of that bucket.
    pub fn from_candles(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.open_time);

        let mut deduped: Vec<Candle> = Vec::with_capacity(candles.len());
        for candle in candles {
            match deduped.last_mut() {
                Some(prev) if prev.open_time == candle.open_time => *prev = candle,
                _ => deduped.push(candle),
            }
        }

        Self { candles: deduped }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// The full ordered slice, e.g. for serialization or charting.
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// The ordered sub-series with `lower <= open_time <= upper`.
    ///
    /// Either bound may be absent, meaning unbounded on that side; with no
    /// bounds the whole series is returned unchanged. Window edges are found
    /// by binary search, so the cost is proportional to the matched range
    /// rather than the series length.
    pub fn range(
        &self,
        lower: Option<DateTime<Utc>>,
        upper: Option<DateTime<Utc>>,
    ) -> &[Candle] {
        let start = match lower {
            Some(lo) => self.candles.partition_point(|c| c.open_time < lo),
            None => 0,
        };
        let end = match upper {
            Some(hi) => self.candles.partition_point(|c| c.open_time <= hi),
            None => self.candles.len(),
        };

        if start >= end {
            &[]
        } else {
            &self.candles[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn candle(day: u32, close: rust_decimal::Decimal) -> Candle {
        Candle::new(
            Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            close,
            close,
            close,
            close,
            dec!(1),
            "BTC".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn sorts_out_of_order_input() {
        let series =
            TimeSeries::from_candles(vec![candle(3, dec!(30)), candle(1, dec!(10)), candle(2, dec!(20))]);

        let closes: Vec<_> = series.candles().iter().map(|c| c.close).collect();
        assert_eq!(closes, vec![dec!(10), dec!(20), dec!(30)]);
    }

    #[test]
    fn duplicate_timestamps_keep_the_last_seen_record() {
        let series = TimeSeries::from_candles(vec![
            candle(1, dec!(10)),
            candle(2, dec!(20)),
            candle(2, dec!(25)),
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().close, dec!(25));
    }

    #[test]
    fn range_without_bounds_is_the_full_series() {
        let series =
            TimeSeries::from_candles(vec![candle(1, dec!(10)), candle(2, dec!(20)), candle(3, dec!(30))]);

        assert_eq!(series.range(None, None), series.candles());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let series =
            TimeSeries::from_candles(vec![candle(1, dec!(10)), candle(2, dec!(20)), candle(3, dec!(30))]);

        let lo = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let hi = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

        let window = series.range(Some(lo), Some(hi));
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].close, dec!(20));
        assert_eq!(window[1].close, dec!(30));
    }

    #[test]
    fn range_outside_the_series_is_empty() {
        let series = TimeSeries::from_candles(vec![candle(1, dec!(10))]);

        let lo = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert!(series.range(Some(lo), None).is_empty());
    }
}
