//! R² PDF Dashboard
//!
//! Upload Excel workbooks, pick a `date_value`, and see the normal
//! distribution fitted to the matching `r2_rolling` values across all files.
//!
//! The analysis itself ([`pipeline::run_analysis`]) is independent of the UI
//! and can be driven directly from tests.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod stats;
pub mod ui;
