use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach the exchange: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("The exchange returned an error: code {0}: {1}")]
    Exchange(i16, String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid data from the exchange: {0}")]
    InvalidData(String),
}
