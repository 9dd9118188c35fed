use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed candle record: {0}")]
    MalformedRecord(String),

    #[error("Unrecognized symbol: {0:?}")]
    UnrecognizedSymbol(String),
}
