use chrono::{TimeZone, Utc};
use core_types::{Candle, CoreError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// One kline row as returned by `GET /api/v3/klines`: a 12-element JSON
/// array of open time, OHLCV strings, close time and assorted volume fields
/// this application ignores.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    i64,    // open time (ms)
    String, // open
    String, // high
    String, // low
    String, // close
    String, // volume
    i64,    // close time (ms)
    String, // quote asset volume
    i64,    // number of trades
    String, // taker buy base volume
    String, // taker buy quote volume
    String, // ignore
);

impl RawKline {
    /// Validates one raw row into a [`Candle`] for an already-normalized
    /// base symbol.
    ///
    /// Parse failures and invariant violations both surface as
    /// `MalformedRecord`, so the caller can drop the row and keep the batch.
    pub fn into_candle(self, base_symbol: &str) -> Result<Candle, CoreError> {
        let open_time = Utc
            .timestamp_millis_opt(self.0)
            .single()
            .ok_or_else(|| CoreError::MalformedRecord(format!("invalid open time: {}", self.0)))?;

        Candle::new(
            open_time,
            parse_decimal("open", &self.1)?,
            parse_decimal("high", &self.2)?,
            parse_decimal("low", &self.3)?,
            parse_decimal("close", &self.4)?,
            parse_decimal("volume", &self.5)?,
            base_symbol.to_string(),
        )
    }
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal, CoreError> {
    Decimal::from_str(value).map_err(|_| {
        CoreError::MalformedRecord(format!("{name} is not a finite number: {value:?}"))
    })
}

/// The response from `GET /api/v3/ticker/price`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceTicker {
    pub symbol: String,
    /// The exchange sends the price as a string; Decimal accepts it directly.
    pub price: Decimal,
}

/// Represents an error response from the exchange API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub code: i16,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(open: &str, high: &str, low: &str, close: &str) -> RawKline {
        RawKline(
            1_700_000_000_000,
            open.to_string(),
            high.to_string(),
            low.to_string(),
            close.to_string(),
            "1000".to_string(),
            1_700_000_059_999,
            "0".to_string(),
            0,
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
        )
    }

    #[test]
    fn a_kline_row_deserializes_from_the_wire_shape() {
        let json = r#"[1700000000000, "100.1", "110.5", "95.0", "105.2",
                       "1234.5", 1700000059999, "0", 42, "0", "0", "0"]"#;
        let row: RawKline = serde_json::from_str(json).unwrap();

        let candle = row.into_candle("BTC").unwrap();
        assert_eq!(candle.open, dec!(100.1));
        assert_eq!(candle.high, dec!(110.5));
        assert_eq!(candle.close, dec!(105.2));
        assert_eq!(candle.symbol, "BTC");
        assert_eq!(candle.open_time.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn an_unparsable_price_is_a_malformed_record() {
        let result = raw("100", "110", "95", "not-a-number").into_candle("BTC");
        assert!(matches!(result, Err(CoreError::MalformedRecord(_))));
    }

    #[test]
    fn an_inverted_high_low_is_a_malformed_record() {
        let result = raw("100", "90", "95", "100").into_candle("BTC");
        assert!(matches!(result, Err(CoreError::MalformedRecord(_))));
    }

    #[test]
    fn the_price_ticker_accepts_a_string_price() {
        let json = r#"{"symbol": "BTCUSDT", "price": "64123.45"}"#;
        let ticker: PriceTicker = serde_json::from_str(json).unwrap();

        assert_eq!(ticker.price, dec!(64123.45));
    }
}
