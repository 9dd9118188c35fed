use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid interval '{name}': lower bound {lower} is after upper bound {upper}")]
    InvalidInterval {
        name: String,
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    },
}
