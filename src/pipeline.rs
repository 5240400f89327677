//! One analysis run: uploads + key → report.
//!
//! ```text
//!   files, key ──► validate ──► per-file extract ──► aggregate ──► fit ──► curve
//!                     │               │                  │
//!                 RunError       FileError (skip)    RunError::NoValues
//! ```

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::data::filter::{matching_values, Matched};
use crate::data::loader::decode_table;
use crate::data::model::{LookupKey, UploadedFile};
use crate::error::{FileError, RunError, StatsError};
use crate::stats::{density_curve, summarize, DensityCurve, Summary};

// ---------------------------------------------------------------------------
// Run results
// ---------------------------------------------------------------------------

/// One aggregated sample and the upload it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    /// Index into the uploaded files of the run.
    pub file_index: usize,
}

/// What a single file did during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Contributed { count: usize, ignored: usize },
    Skipped(FileError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub name: String,
    pub status: FileStatus,
}

/// Successful run: the fitted distribution for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub key: LookupKey,
    pub key_column: String,
    pub value_column: String,
    pub samples: Vec<Sample>,
    pub summary: Summary,
    /// `Err` when the samples have no spread; the summary is still valid.
    pub density: Result<DensityCurve, StatsError>,
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    key_column: &'a str,
    key: String,
    value_column: &'a str,
    count: usize,
    mean: f64,
    std_dev: f64,
}

impl AnalysisReport {
    /// Aggregated values in upload order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Chart title.
    pub fn title(&self) -> String {
        format!(
            "PDF of {} for {} = {}",
            self.value_column, self.key_column, self.key
        )
    }

    /// Summary facts as pretty JSON, for the clipboard.
    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SummaryExport {
            key_column: &self.key_column,
            key: self.key.to_string(),
            value_column: &self.value_column,
            count: self.summary.count,
            mean: self.summary.mean,
            std_dev: self.summary.std_dev,
        })
    }
}

/// Everything a run produced, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub files: Vec<FileReport>,
    /// Non-fatal messages, one per problem file.
    pub warnings: Vec<String>,
    pub result: Result<AnalysisReport, RunError>,
}

impl RunOutcome {
    fn rejected(err: RunError) -> Self {
        Self {
            files: Vec::new(),
            warnings: Vec::new(),
            result: Err(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Values of the configured value column for `key` in one upload.
pub fn extract_values(
    file: &UploadedFile,
    key: &LookupKey,
    config: &AnalysisConfig,
) -> Result<Matched, FileError> {
    let table = decode_table(&file.bytes).map_err(|e| FileError::Decode {
        name: file.name.clone(),
        reason: format!("{e:#}"),
    })?;

    matching_values(&table, key, &config.key_column, &config.value_column).ok_or_else(|| {
        FileError::MissingColumns {
            name: file.name.clone(),
        }
    })
}

/// Run the full analysis over `files` for the raw key text.
///
/// Files are processed in order; a file that fails to decode or lacks a
/// required column is skipped with a warning. The run fails only when inputs
/// are missing or no value matched.
pub fn run_analysis(files: &[UploadedFile], raw_key: &str, config: &AnalysisConfig) -> RunOutcome {
    if files.is_empty() {
        return RunOutcome::rejected(RunError::NoFiles);
    }
    if raw_key.trim().is_empty() {
        return RunOutcome::rejected(RunError::NoKey {
            key_column: config.key_column.clone(),
        });
    }

    let key = LookupKey::interpret(raw_key);
    let mut reports = Vec::with_capacity(files.len());
    let mut warnings = Vec::new();
    let mut samples = Vec::new();

    for (file_index, file) in files.iter().enumerate() {
        let status = match extract_values(file, &key, config) {
            Ok(matched) => {
                debug!(
                    "{}: {} value(s) for {} = {}",
                    file.name,
                    matched.values.len(),
                    config.key_column,
                    key.quoted()
                );
                if matched.ignored > 0 {
                    warnings.push(format!(
                        "{}: ignored {} non-numeric {} value(s)",
                        file.name, matched.ignored, config.value_column
                    ));
                }
                samples.extend(
                    matched
                        .values
                        .iter()
                        .map(|&value| Sample { value, file_index }),
                );
                FileStatus::Contributed {
                    count: matched.values.len(),
                    ignored: matched.ignored,
                }
            }
            Err(e) => {
                warn!("Skipping file: {e}");
                warnings.push(e.to_string());
                FileStatus::Skipped(e)
            }
        };
        reports.push(FileReport {
            name: file.name.clone(),
            status,
        });
    }

    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    let result = match summarize(&values) {
        Ok(summary) => {
            let density = density_curve(&summary, config.grid_points, config.sigma_span);
            info!(
                "{} = {}: n={}, mean={:.4}, std={:.4}",
                config.key_column,
                key.quoted(),
                summary.count,
                summary.mean,
                summary.std_dev
            );
            Ok(AnalysisReport {
                key,
                key_column: config.key_column.clone(),
                value_column: config.value_column.clone(),
                samples,
                summary,
                density,
            })
        }
        Err(_) => Err(RunError::NoValues {
            key: key.quoted(),
            key_column: config.key_column.clone(),
            value_column: config.value_column.clone(),
        }),
    };

    RunOutcome {
        files: reports,
        warnings,
        result,
    }
}
