use analytics::{IntervalSpec, MetricsEngine};
use api_client::{BinanceClient, MarketDataSource};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use configuration::{Config, IntervalWindow, load_config};
use core_types::{Candle, normalize_symbol};
use datastore::CsvStore;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use timeseries::{SeriesStore, TimeSeries};
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the Vantage dashboard application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (e.g. the exchange API key) from .env, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Refresh => handle_refresh(&config).await,
        Commands::Report => handle_report(&config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal dashboard for crypto market metrics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the full candle history for the configured symbols and save it.
    Refresh,
    /// Load the saved history, fetch live prices and render the dashboard.
    Report,
}

// ==============================================================================
// Refresh Command Logic
// ==============================================================================

/// Fetches the daily history for every configured symbol concurrently and
/// persists the combined result. One symbol failing degrades that symbol to
/// an empty series; the others are still fetched and saved.
async fn handle_refresh(config: &Config) -> anyhow::Result<()> {
    let client = Arc::new(BinanceClient::new(&config.market));

    let progress = ProgressBar::new(config.market.symbols.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let tasks: Vec<_> = config
        .market
        .symbols
        .iter()
        .cloned()
        .map(|symbol| {
            let client = Arc::clone(&client);
            let suffix = config.market.quote_suffix.clone();
            let interval = config.market.interval.clone();
            let limit = config.market.fetch_limit;
            let pb = progress.clone();

            tokio::spawn(async move {
                pb.set_message(format!("fetching {symbol}"));
                let outcome = fetch_symbol(&*client, &symbol, &suffix, &interval, limit).await;
                pb.inc(1);
                (symbol, outcome)
            })
        })
        .collect();

    let mut store = SeriesStore::new();
    let mut bases = Vec::new();
    for joined in join_all(tasks).await {
        let (symbol, outcome) = joined?;
        match outcome {
            Ok((base, candles)) => {
                tracing::info!(symbol = %symbol, records = candles.len(), "fetched history");
                store.replace(base.clone(), candles);
                bases.push(base);
            }
            Err(e) => tracing::warn!(symbol = %symbol, error = %e, "skipping symbol"),
        }
    }

    let series: Vec<Arc<TimeSeries>> = bases.iter().map(|base| store.get(base)).collect();
    let csv_store = CsvStore::new(&config.storage.csv_path);
    csv_store.save(series.iter().map(Arc::as_ref))?;

    progress.finish_with_message("history saved");
    println!("Data saved to {}", csv_store.path().display());

    Ok(())
}

async fn fetch_symbol(
    client: &dyn MarketDataSource,
    symbol: &str,
    quote_suffix: &str,
    interval: &str,
    limit: u32,
) -> anyhow::Result<(String, Vec<Candle>)> {
    let base = normalize_symbol(symbol, quote_suffix)?;
    let candles = client.fetch_klines(symbol, interval, limit).await?;
    Ok((base, candles))
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Loads the saved history, fetches a live price per symbol and renders the
/// computed reports. A missing live price leaves the price-derived fields
/// absent rather than failing the report.
async fn handle_report(config: &Config) -> anyhow::Result<()> {
    let csv_store = CsvStore::new(&config.storage.csv_path);
    let history = csv_store.load().map_err(|e| {
        anyhow::anyhow!("{e}; run `vantage refresh` to download the history first")
    })?;

    // Partition the flat history back into per-symbol series.
    let mut by_symbol: HashMap<String, Vec<Candle>> = HashMap::new();
    for candle in history {
        by_symbol.entry(candle.symbol.clone()).or_default().push(candle);
    }
    let mut store = SeriesStore::new();
    for (symbol, candles) in by_symbol {
        store.replace(symbol, candles);
    }

    let prices = fetch_prices(config).await;
    let specs = resolve_intervals(&config.dashboard.intervals, Utc::now());
    let engine = MetricsEngine::new();

    let mut reports = Vec::new();
    for symbol in &config.market.symbols {
        let base = match normalize_symbol(symbol, &config.market.quote_suffix) {
            Ok(base) => base,
            Err(e) => {
                tracing::warn!(symbol = %symbol, error = %e, "skipping symbol");
                continue;
            }
        };
        let series = store.get(&base);
        let price = prices.get(symbol.as_str()).copied().flatten();
        reports.push(engine.build_report(&base, &series, price, &specs));
    }

    render::print_dashboard(&reports);

    Ok(())
}

/// Fetches the live price for every configured symbol concurrently. A failed
/// fetch is logged and reported as "no data" for that symbol.
async fn fetch_prices(config: &Config) -> HashMap<String, Option<Decimal>> {
    let client = Arc::new(BinanceClient::new(&config.market));

    let tasks: Vec<_> = config
        .market
        .symbols
        .iter()
        .cloned()
        .map(|symbol| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let price = match client.fetch_price(&symbol).await {
                    Ok(price) => Some(price),
                    Err(e) => {
                        tracing::warn!(symbol = %symbol, error = %e, "no live price");
                        None
                    }
                };
                (symbol, price)
            })
        })
        .collect();

    let mut prices = HashMap::new();
    for joined in join_all(tasks).await {
        if let Ok((symbol, price)) = joined {
            prices.insert(symbol, price);
        }
    }
    prices
}

/// Resolves the configured display windows against the current time.
fn resolve_intervals(windows: &[IntervalWindow], now: DateTime<Utc>) -> Vec<IntervalSpec> {
    windows
        .iter()
        .map(|window| match window.lookback_days {
            Some(days) => IntervalSpec::lookback(&window.name, now, i64::from(days)),
            None => IntervalSpec::all_time(&window.name),
        })
        .collect()
}
