use crate::interval::IntervalSummary;
use rust_decimal::Decimal;
use serde::Serialize;

/// The complete set of computed metrics for one symbol.
///
/// This struct is the final output of the `MetricsEngine` and the data
/// transfer object consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolReport {
    pub symbol: String,

    /// Maximum `high` ever observed; absent for an empty series.
    pub all_time_high: Option<Decimal>,

    /// Live price at report time; absent when the fetch yielded no data.
    pub current_price: Option<Decimal>,

    /// Percent distance of the current price from the all-time high,
    /// rounded to two decimals. Absent whenever the current price is
    /// absent, or the all-time high is absent or zero.
    pub percent_from_ath: Option<Decimal>,

    /// Per-interval summaries in configuration order. `None` marks an
    /// interval that matched no records.
    pub intervals: Vec<(String, Option<IntervalSummary>)>,
}
