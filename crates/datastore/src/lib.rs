//! # Vantage Datastore
//!
//! This crate is the system's permanent archive: it saves the full candle
//! history to a single flat CSV file and loads it back.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** Encapsulates all file-format knowledge behind a
//!   small API; the rest of the application only sees ordered `Candle`
//!   records going in and coming out.
//! - **Lossless round-trip:** Decimal prices are written in their exact
//!   string form and timestamps as RFC 3339, so a save followed by a load
//!   reproduces every record field-for-field.
//! - **Degrade, don't halt:** An unreadable row is skipped with a warning;
//!   one bad line never discards the rest of the history.
//!
//! ## Public API
//!
//! - `CsvStore`: the save/load handle over one history file.
//! - `StoreError`: the specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use store::CsvStore;
