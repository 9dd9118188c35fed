use crate::error::AnalyticsError;
use crate::indicators::IndicatorSnapshot;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A named, possibly unbounded time window used to slice a series.
///
/// Bounds are inclusive and either may be absent. Windows are configuration
/// data resolved against "now" at report time, never derived from the
/// series itself.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSpec {
    name: String,
    lower: Option<DateTime<Utc>>,
    upper: Option<DateTime<Utc>>,
}

impl IntervalSpec {
    /// Creates a window, rejecting bounds with `lower > upper`.
    pub fn new(
        name: impl Into<String>,
        lower: Option<DateTime<Utc>>,
        upper: Option<DateTime<Utc>>,
    ) -> Result<Self, AnalyticsError> {
        let name = name.into();
        if let (Some(lo), Some(hi)) = (lower, upper) {
            if lo > hi {
                return Err(AnalyticsError::InvalidInterval {
                    name,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { name, lower, upper })
    }

    /// A window reaching `days` back from `now`, unbounded above.
    pub fn lookback(name: impl Into<String>, now: DateTime<Utc>, days: i64) -> Self {
        Self {
            name: name.into(),
            lower: Some(now - Duration::days(days)),
            upper: None,
        }
    }

    /// The all-time window: unbounded on both sides.
    pub fn all_time(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: None,
            upper: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower(&self) -> Option<DateTime<Utc>> {
        self.lower
    }

    pub fn upper(&self) -> Option<DateTime<Utc>> {
        self.upper
    }
}

/// The derived metrics for one interval window.
///
/// Ephemeral: recomputed on demand, never persisted. An interval that
/// matches no records has no summary at all rather than zeroed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalSummary {
    /// Highest `high` in the window.
    pub high: Decimal,
    /// Lowest `low` in the window.
    pub low: Decimal,
    /// Close of the last record in the window.
    pub close: Decimal,
    /// The four moving-average values at the window's last record.
    pub indicators: IndicatorSnapshot,
}
