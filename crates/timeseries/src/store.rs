use crate::series::TimeSeries;
use core_types::Candle;
use std::collections::HashMap;
use std::sync::Arc;

/// Owns one immutable [`TimeSeries`] per symbol.
///
/// Single-writer discipline: `replace` swaps the whole series behind an
/// `Arc`, so a reader holding the previous handle keeps a fully consistent
/// view of the old series while new readers see the new one. There is no
/// process-wide singleton; the caller owns the store and its lifecycle.
#[derive(Debug, Default)]
pub struct SeriesStore {
    series: HashMap<String, Arc<TimeSeries>>,
    empty: Arc<TimeSeries>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh series for `symbol`, discarding any prior one.
    ///
    /// Input order does not matter; duplicate timestamps resolve to the
    /// last-seen record.
    pub fn replace(&mut self, symbol: impl Into<String>, candles: Vec<Candle>) {
        self.series
            .insert(symbol.into(), Arc::new(TimeSeries::from_candles(candles)));
    }

    /// The series for `symbol`, or a shared empty series when unknown.
    /// Absence is a normal state, not a failure.
    pub fn get(&self, symbol: &str) -> Arc<TimeSeries> {
        self.series
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn candle(day: u32) -> Candle {
        Candle::new(
            Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            dec!(10),
            dec!(10),
            dec!(10),
            dec!(10),
            dec!(1),
            "BTC".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_symbols_read_as_an_empty_series() {
        let store = SeriesStore::new();
        assert!(store.get("BTC").is_empty());
    }

    #[test]
    fn replace_discards_the_previous_series() {
        let mut store = SeriesStore::new();
        store.replace("BTC", vec![candle(1), candle(2)]);
        store.replace("BTC", vec![candle(3)]);

        assert_eq!(store.get("BTC").len(), 1);
    }

    #[test]
    fn an_old_handle_survives_a_replace_intact() {
        let mut store = SeriesStore::new();
        store.replace("BTC", vec![candle(1), candle(2)]);

        let before = store.get("BTC");
        store.replace("BTC", vec![candle(3)]);

        assert_eq!(before.len(), 2);
        assert_eq!(store.get("BTC").len(), 1);
    }
}
