use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLCV observation for one time bucket of one symbol.
///
/// Construction goes through [`Candle::new`], which enforces the numeric
/// invariants at the ingestion boundary. A candle is never mutated after it
/// is built; a refreshed fetch replaces the series it belongs to wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open time of the bucket, millisecond resolution.
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    /// Base asset identifier with the quote suffix already stripped, e.g. "BTC".
    pub symbol: String,
}

impl Candle {
    /// Builds a validated candle from raw field values.
    ///
    /// Rejects negative prices or volume, and any record violating
    /// `low <= min(open, close) <= max(open, close) <= high`. Callers at the
    /// ingestion boundary drop rejected records; they never enter a series.
    pub fn new(
        open_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
        symbol: String,
    ) -> Result<Self, CoreError> {
        let fields = [
            ("open", open),
            ("high", high),
            ("low", low),
            ("close", close),
            ("volume", volume),
        ];
        for (name, value) in fields {
            if value.is_sign_negative() {
                return Err(CoreError::MalformedRecord(format!(
                    "{name} is negative: {value}"
                )));
            }
        }
        if low > open.min(close) || high < open.max(close) {
            return Err(CoreError::MalformedRecord(format!(
                "OHLC ordering violated: open={open} high={high} low={low} close={close}"
            )));
        }

        Ok(Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            symbol,
        })
    }
}

/// Strips the fixed-length quote-currency suffix from a raw pair symbol,
/// e.g. "BTCUSDT" with suffix "USDT" becomes "BTC".
///
/// The strip is positional: the exchange's pair format is fixed, so the last
/// `quote_suffix.len()` characters are removed without content matching.
/// Fails when the raw symbol is not longer than the suffix.
pub fn normalize_symbol(raw: &str, quote_suffix: &str) -> Result<String, CoreError> {
    raw.len()
        .checked_sub(quote_suffix.len())
        .filter(|&cut| cut > 0)
        .and_then(|cut| raw.get(..cut))
        .map(str::to_string)
        .ok_or_else(|| CoreError::UnrecognizedSymbol(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn accepts_a_well_formed_record() {
        let candle = Candle::new(
            ts(),
            dec!(100),
            dec!(110),
            dec!(95),
            dec!(105),
            dec!(1000),
            "BTC".to_string(),
        )
        .unwrap();

        assert_eq!(candle.open, dec!(100));
        assert_eq!(candle.symbol, "BTC");
    }

    #[test]
    fn rejects_negative_fields() {
        let result = Candle::new(
            ts(),
            dec!(100),
            dec!(110),
            dec!(95),
            dec!(105),
            dec!(-1),
            "BTC".to_string(),
        );
        assert!(matches!(result, Err(CoreError::MalformedRecord(_))));
    }

    #[test]
    fn rejects_high_below_close() {
        let result = Candle::new(
            ts(),
            dec!(100),
            dec!(104),
            dec!(95),
            dec!(105),
            dec!(1000),
            "BTC".to_string(),
        );
        assert!(matches!(result, Err(CoreError::MalformedRecord(_))));
    }

    #[test]
    fn rejects_low_above_open() {
        let result = Candle::new(
            ts(),
            dec!(100),
            dec!(110),
            dec!(101),
            dec!(105),
            dec!(1000),
            "BTC".to_string(),
        );
        assert!(matches!(result, Err(CoreError::MalformedRecord(_))));
    }

    #[test]
    fn strips_the_quote_suffix() {
        assert_eq!(normalize_symbol("BTCUSDT", "USDT").unwrap(), "BTC");
        assert_eq!(normalize_symbol("ETHUSDT", "USDT").unwrap(), "ETH");
    }

    #[test]
    fn rejects_symbols_not_longer_than_the_suffix() {
        assert!(matches!(
            normalize_symbol("USD", "USDT"),
            Err(CoreError::UnrecognizedSymbol(_))
        ));
        assert!(matches!(
            normalize_symbol("USDT", "USDT"),
            Err(CoreError::UnrecognizedSymbol(_))
        ));
    }
}
