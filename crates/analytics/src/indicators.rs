use rust_decimal::Decimal;
use serde::Serialize;

/// Window length of the short moving averages.
pub const SHORT_WINDOW: usize = 50;
/// Window length of the long moving averages.
pub const LONG_WINDOW: usize = 200;

/// Simple moving average, aligned to `closes`.
///
/// The value at position `i` is the arithmetic mean of the `window` closes
/// ending at `i`, so positions before `window - 1` are `None` rather than a
/// partial mean. A rolling sum keeps the whole computation to one pass.
pub fn sma(closes: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    let divisor = Decimal::from(window as u64);
    let mut rolling = Decimal::ZERO;
    let mut out = Vec::with_capacity(closes.len());

    for (i, &close) in closes.iter().enumerate() {
        rolling += close;
        if i >= window {
            rolling -= closes[i - window];
        }
        out.push((i + 1 >= window).then(|| rolling / divisor));
    }

    out
}

/// Exponential moving average with smoothing `alpha = 2 / (window + 1)`.
///
/// Seeded from the first close: `ema[0] = closes[0]`, then
/// `ema[i] = alpha * closes[i] + (1 - alpha) * ema[i - 1]`. Unlike the SMA
/// there is no warm-up gap; the value exists at every position. Callers rely
/// on that asymmetry when deciding whether a metric is present or absent.
pub fn ema(closes: &[Decimal], window: usize) -> Vec<Decimal> {
    let alpha = Decimal::from(2u64) / Decimal::from(window as u64 + 1);
    let retain = Decimal::ONE - alpha;

    let mut out = Vec::with_capacity(closes.len());
    let mut state: Option<Decimal> = None;

    for &close in closes {
        let next = match state {
            None => close,
            Some(prev) => alpha * close + retain * prev,
        };
        out.push(next);
        state = Some(next);
    }

    out
}

/// The four indicator values evaluated at one position of a series.
///
/// `None` means the indicator is undefined there: the SMA warm-up gap, or a
/// position outside the series entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndicatorSnapshot {
    pub sma_50: Option<Decimal>,
    pub sma_200: Option<Decimal>,
    pub ema_50: Option<Decimal>,
    pub ema_200: Option<Decimal>,
}

/// The series-aligned indicator sequences for one ordered list of closes.
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    sma_50: Vec<Option<Decimal>>,
    sma_200: Vec<Option<Decimal>>,
    ema_50: Vec<Decimal>,
    ema_200: Vec<Decimal>,
}

impl IndicatorSeries {
    /// Computes all four sequences over `closes` (ascending, deduplicated).
    pub fn compute(closes: &[Decimal]) -> Self {
        Self {
            sma_50: sma(closes, SHORT_WINDOW),
            sma_200: sma(closes, LONG_WINDOW),
            ema_50: ema(closes, SHORT_WINDOW),
            ema_200: ema(closes, LONG_WINDOW),
        }
    }

    /// The four values at `position`, all-absent when out of range.
    pub fn values_at(&self, position: usize) -> IndicatorSnapshot {
        IndicatorSnapshot {
            sma_50: self.sma_50.get(position).copied().flatten(),
            sma_200: self.sma_200.get(position).copied().flatten(),
            ema_50: self.ema_50.get(position).copied(),
            ema_200: self.ema_200.get(position).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sma_is_absent_during_warm_up_and_exact_after() {
        // Closes 10, 20, ..., 600: sixty points, positions 0..=59.
        let closes: Vec<Decimal> = (1..=60).map(|i| Decimal::from(i * 10)).collect();

        let values = sma(&closes, SHORT_WINDOW);
        for position in 0..SHORT_WINDOW - 1 {
            assert_eq!(values[position], None, "position {position}");
        }
        // mean(10, 20, ..., 500) = 255
        assert_eq!(values[49], Some(dec!(255)));
        // mean(110, 120, ..., 600) = 355
        assert_eq!(values[59], Some(dec!(355)));
    }

    #[test]
    fn sma_value_is_the_mean_of_the_last_window_closes() {
        let closes = vec![dec!(1), dec!(2), dec!(3), dec!(4)];
        let values = sma(&closes, 3);

        assert_eq!(values, vec![None, None, Some(dec!(2)), Some(dec!(3))]);
    }

    #[test]
    fn ema_is_seeded_from_the_first_close() {
        let closes = vec![dec!(100), dec!(110)];
        let values = ema(&closes, SHORT_WINDOW);

        assert_eq!(values[0], dec!(100));
    }

    #[test]
    fn ema_follows_the_recurrence_at_every_position() {
        let closes = vec![dec!(100), dec!(110), dec!(95), dec!(120)];
        let window = 10usize;
        let alpha = Decimal::from(2u64) / Decimal::from(window as u64 + 1);

        let values = ema(&closes, window);
        assert_eq!(values.len(), closes.len());

        let mut expected = closes[0];
        for i in 1..closes.len() {
            expected = alpha * closes[i] + (Decimal::ONE - alpha) * expected;
            assert_eq!(values[i], expected, "position {i}");
        }
    }

    #[test]
    fn empty_input_yields_empty_sequences() {
        let series = IndicatorSeries::compute(&[]);
        assert_eq!(series.values_at(0), IndicatorSnapshot::default());
    }

    #[test]
    fn snapshot_reflects_the_sma_ema_presence_asymmetry() {
        // Seven closes: far too short for either SMA window, but the EMAs
        // exist from the first point onward.
        let closes: Vec<Decimal> = (1..=7).map(Decimal::from).collect();
        let snapshot = IndicatorSeries::compute(&closes).values_at(6);

        assert_eq!(snapshot.sma_50, None);
        assert_eq!(snapshot.sma_200, None);
        assert!(snapshot.ema_50.is_some());
        assert!(snapshot.ema_200.is_some());
    }

    #[test]
    fn positions_past_the_end_are_all_absent() {
        let closes = vec![dec!(1), dec!(2)];
        let snapshot = IndicatorSeries::compute(&closes).values_at(2);

        assert_eq!(snapshot, IndicatorSnapshot::default());
    }
}
