//! Error types for the dashboard.
//!
//! `thiserror` types for the outcomes a user can see; `anyhow` for the
//! decoding plumbing underneath, flattened into [`FileError::Decode`].

use thiserror::Error;

/// Run-level failures: the run stops and nothing is plotted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError {
    #[error("Please upload at least one Excel file.")]
    NoFiles,

    #[error("Please enter a {key_column} to analyze.")]
    NoKey { key_column: String },

    /// `key` is already rendered for display (text keys quoted).
    #[error("No {value_column} values found for {key_column} = {key}")]
    NoValues {
        key: String,
        key_column: String,
        value_column: String,
    },
}

/// Per-file failures: the file is skipped and the run continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("Could not read {name}: {reason}")]
    Decode { name: String, reason: String },

    #[error("{name} missing required columns.")]
    MissingColumns { name: String },
}

/// The samples cannot carry a normal fit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("No samples to summarize")]
    Empty,

    #[error("Insufficient variance to plot a distribution ({count} sample(s) around {mean:.4}, no measurable spread)")]
    InsufficientVariance { count: usize, mean: f64 },
}
