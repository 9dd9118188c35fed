use crate::indicators::IndicatorSeries;
use crate::interval::{IntervalSpec, IntervalSummary};
use crate::report::SymbolReport;
use rust_decimal::Decimal;
use timeseries::TimeSeries;

/// A stateless calculator deriving dashboard metrics from candle series.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarizes one window of `series`: high, low and last close plus the
    /// four moving-average values at the window's last record.
    ///
    /// Returns `None` for an empty window; that is a normal state, not an
    /// error. The indicators restart on the filtered slice: the question
    /// answered is "what would the averages look like with only this
    /// window's data", so a short window legitimately reports SMA_50/200 as
    /// absent, and the EMA re-seeds from the slice's first close rather than
    /// carrying state from before the window.
    pub fn summarize(&self, series: &TimeSeries, spec: &IntervalSpec) -> Option<IntervalSummary> {
        let window = series.range(spec.lower(), spec.upper());
        let last = window.last()?;

        let mut high = last.high;
        let mut low = last.low;
        for candle in window {
            high = high.max(candle.high);
            low = low.min(candle.low);
        }

        let closes: Vec<Decimal> = window.iter().map(|c| c.close).collect();
        let indicators = IndicatorSeries::compute(&closes).values_at(closes.len() - 1);

        Some(IntervalSummary {
            high,
            low,
            close: last.close,
            indicators,
        })
    }

    /// Builds the complete report for one symbol: all-time high, current
    /// price, percent distance from the ATH and one summary per configured
    /// interval. Pure function of its inputs; no side effects.
    pub fn build_report(
        &self,
        symbol: &str,
        series: &TimeSeries,
        current_price: Option<Decimal>,
        specs: &[IntervalSpec],
    ) -> SymbolReport {
        let all_time_high = series.candles().iter().map(|c| c.high).max();

        let percent_from_ath = match (current_price, all_time_high) {
            (Some(price), Some(ath)) if !ath.is_zero() => {
                Some(((price - ath) / ath * Decimal::from(100u64)).round_dp(2))
            }
            _ => None,
        };

        let intervals = specs
            .iter()
            .map(|spec| (spec.name().to_string(), self.summarize(series, spec)))
            .collect();

        SymbolReport {
            symbol: symbol.to_string(),
            all_time_high,
            current_price,
            percent_from_ath,
            intervals,
        }
    }
}
