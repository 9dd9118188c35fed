//! # Vantage Time Series Store
//!
//! This crate owns the in-memory candle history: one ordered, immutable
//! series per symbol, held by an explicit store object.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** No I/O and no knowledge of external systems; it
//!   depends only on `core-types` (Layer 0).
//! - **Replace, never edit:** A series is rebuilt wholesale on refresh.
//!   Individual records are never mutated in place, so any handle to a
//!   series is a consistent snapshot.
//! - **Absence is normal:** Asking for an unknown symbol yields an empty
//!   series, not an error.
//!
//! ## Public API
//!
//! - `TimeSeries`: the ordered per-symbol candle sequence with range queries.
//! - `SeriesStore`: the symbol -> series map owned by the caller.

pub mod series;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use series::TimeSeries;
pub use store::SeriesStore;
