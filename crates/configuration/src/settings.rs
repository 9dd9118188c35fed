use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub market: MarketConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
}

/// Connection details and the tracked universe of the market data source.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// REST base URL, e.g. "https://api.binance.us".
    pub base_url: String,
    /// Optional API key, sent as the `X-MBX-APIKEY` header when present.
    pub api_key: Option<String>,
    /// Raw pair symbols as the exchange names them, e.g. "BTCUSDT".
    pub symbols: Vec<String>,
    /// Fixed-length quote suffix stripped from raw symbols for display.
    pub quote_suffix: String,
    /// Kline bucket size requested from the exchange, e.g. "1d".
    pub interval: String,
    /// Maximum klines per fetch; the exchange caps a single request at 1000.
    pub fetch_limit: u32,
}

/// Where the candle history is persisted between runs.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub csv_path: String,
}

/// The named display windows of the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub intervals: Vec<IntervalWindow>,
}

/// One display window: a name plus an optional lookback horizon in days.
/// An absent `lookback_days` means all-time.
#[derive(Debug, Clone, Deserialize)]
pub struct IntervalWindow {
    pub name: String,
    pub lookback_days: Option<u32>,
}
