use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access the history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read or write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unreadable history row: {0}")]
    Parse(String),
}
