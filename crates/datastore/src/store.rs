use crate::error::StoreError;
use chrono::{DateTime, Utc};
use core_types::Candle;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use timeseries::TimeSeries;

const HEADER: [&str; 7] = [
    "open_time",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "symbol",
];

/// Saves and reloads the full candle history as one flat CSV file.
///
/// One row per candle, all symbols combined, in series order. Decimal
/// fields round-trip through their exact string form and timestamps
/// through RFC 3339, so the reload reproduces the saved records
/// field-for-field.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every given series to disk, replacing the previous file.
    pub fn save<'a>(
        &self,
        series: impl IntoIterator<Item = &'a TimeSeries>,
    ) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;

        for s in series {
            for candle in s.candles() {
                writer.write_record([
                    candle.open_time.to_rfc3339(),
                    candle.open.to_string(),
                    candle.high.to_string(),
                    candle.low.to_string(),
                    candle.close.to_string(),
                    candle.volume.to_string(),
                    candle.symbol.clone(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Reads the full history back, in file order.
    ///
    /// A row that fails to parse or validate is skipped with a warning; the
    /// rest of the file is still loaded.
    pub fn load(&self) -> Result<Vec<Candle>, StoreError> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let mut candles = Vec::new();
        for row in reader.records() {
            let record = row?;
            match parse_row(&record) {
                Ok(candle) => candles.push(candle),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable history row"),
            }
        }

        Ok(candles)
    }
}

fn parse_row(record: &csv::StringRecord) -> Result<Candle, StoreError> {
    if record.len() < HEADER.len() {
        return Err(StoreError::Parse(format!(
            "expected {} columns, got {}",
            HEADER.len(),
            record.len()
        )));
    }

    let open_time = DateTime::parse_from_rfc3339(&record[0])
        .map_err(|e| StoreError::Parse(format!("open_time: {e}")))?
        .with_timezone(&Utc);

    Candle::new(
        open_time,
        parse_decimal("open", &record[1])?,
        parse_decimal("high", &record[2])?,
        parse_decimal("low", &record[3])?,
        parse_decimal("close", &record[4])?,
        parse_decimal("volume", &record[5])?,
        record[6].to_string(),
    )
    .map_err(|e| StoreError::Parse(e.to_string()))
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(value).map_err(|e| StoreError::Parse(format!("{name}: {e}")))
}
