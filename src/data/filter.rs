use super::model::{CellValue, LookupKey, Table};

// ---------------------------------------------------------------------------
// Row selection: rows whose key cell matches → value-column samples
// ---------------------------------------------------------------------------

/// Samples pulled from one table for one key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matched {
    /// Numeric values of the matching rows, in row order.
    pub values: Vec<f64>,
    /// Matching rows whose value cell held something non-numeric.
    pub ignored: usize,
}

/// Collect the value-column samples of every row whose key cell matches `key`.
///
/// Returns `None` when either column is absent from the header. However many
/// rows match (none, one or several), the result is a flat sequence:
/// * missing cells (blank or NaN) are dropped silently
/// * non-numeric cells are dropped and counted in [`Matched::ignored`]
pub fn matching_values(
    table: &Table,
    key: &LookupKey,
    key_column: &str,
    value_column: &str,
) -> Option<Matched> {
    let key_idx = table.column_index(key_column)?;
    let value_idx = table.column_index(value_column)?;

    let mut matched = Matched::default();
    for row in 0..table.len() {
        if !key.matches(table.cell(row, key_idx)) {
            continue;
        }
        let cell = table.cell(row, value_idx);
        if cell.is_missing() {
            continue;
        }
        match cell.as_f64() {
            Some(v) => matched.values.push(v),
            None => matched.ignored += 1,
        }
    }
    Some(matched)
}
