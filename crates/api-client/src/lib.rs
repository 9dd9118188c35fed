use crate::error::ApiError;
use crate::responses::{ApiErrorResponse, PriceTicker, RawKline};
use async_trait::async_trait;
use configuration::MarketConfig;
use core_types::{Candle, normalize_symbol};
use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;

pub mod error;
pub mod responses;

/// The generic, abstract interface to a market data source.
///
/// Implementations return already-materialized values; retries, rate limits
/// and authentication are their own concern, never the caller's. This trait
/// is the contract the orchestration layer uses, allowing the underlying
/// implementation (live or mock) to be swapped out.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches historical klines for a raw pair symbol, oldest first,
    /// already validated and carrying the normalized base symbol.
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, ApiError>;

    /// Fetches the live price for a raw pair symbol.
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, ApiError>;
}

/// A concrete implementation of [`MarketDataSource`] for the Binance REST API.
#[derive(Clone)]
pub struct BinanceClient {
    client: reqwest::Client,
    base_url: String,
    quote_suffix: String,
}

impl BinanceClient {
    pub fn new(config: &MarketConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            headers.insert(
                "X-MBX-APIKEY",
                HeaderValue::from_str(key).expect("Invalid API Key"),
            );
        }

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("Failed to build reqwest client"),
            base_url: config.base_url.clone(),
            quote_suffix: config.quote_suffix.clone(),
        }
    }

    /// Turns a non-success response into the exchange's own error payload
    /// where possible, keeping the raw body otherwise.
    async fn error_for_status(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ApiError::Transport(e),
        };
        match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(payload) => ApiError::Exchange(payload.code, payload.msg),
            Err(_) => ApiError::Deserialization(format!(
                "unexpected error payload (HTTP {status}): {text}"
            )),
        }
    }
}

#[async_trait]
impl MarketDataSource for BinanceClient {
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, ApiError> {
        // Reject the whole batch up front if the symbol cannot be normalized.
        let base = normalize_symbol(symbol, &self.quote_suffix)
            .map_err(|e| ApiError::InvalidData(e.to_string()))?;

        let url = format!("{}/api/v3/klines", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let rows = response.json::<Vec<RawKline>>().await?;

        // A malformed row is dropped; the rest of the batch is still good.
        let mut candles = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_candle(&base) {
                Ok(candle) => candles.push(candle),
                Err(e) => {
                    tracing::warn!(symbol = %symbol, error = %e, "dropping malformed kline")
                }
            }
        }

        Ok(candles)
    }

    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, ApiError> {
        let url = format!("{}/api/v3/ticker/price", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let ticker = response.json::<PriceTicker>().await?;
        Ok(ticker.price)
    }
}
