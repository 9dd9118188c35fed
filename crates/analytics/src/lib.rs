//! # Vantage Analytics Engine
//!
//! This crate derives the dashboard's metrics from candle series: moving
//! averages, per-interval summaries, the all-time high and the distance of
//! the current price from it.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure computation crate with no knowledge of
//!   external systems. It depends only on `core-types` and `timeseries`.
//! - **Stateless Calculation:** The `MetricsEngine` holds no state. It takes
//!   a series plus inputs and produces a `SymbolReport`, which makes it
//!   reliable and easy to test.
//! - **Absence over errors:** A metric that is not meaningful (empty window,
//!   indicator warm-up, missing live price) is reported as `None`. Errors
//!   are reserved for structurally invalid input.
//!
//! ## Public API
//!
//! - `MetricsEngine`: the stateless calculator.
//! - `SymbolReport` / `IntervalSummary`: the computed result structs.
//! - `IntervalSpec`: a named, possibly unbounded time window.
//! - `AnalyticsError`: the specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod indicators;
pub mod interval;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use indicators::{IndicatorSeries, IndicatorSnapshot};
pub use interval::{IntervalSpec, IntervalSummary};
pub use report::SymbolReport;
