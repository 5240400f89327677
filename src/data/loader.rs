use std::io::Cursor;
use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx};

use super::model::{CellValue, Table, UploadedFile};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a file from disk into an [`UploadedFile`]. Dispatch by extension.
///
/// Only `.xlsx` workbooks are accepted.
pub fn read_upload(path: &Path) -> Result<UploadedFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "xlsx" {
        bail!("Unsupported file extension: .{ext}");
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadedFile::new(name, bytes))
}

/// Decode the first worksheet of an `.xlsx` blob into a [`Table`].
///
/// The first row of the used range is the header; every following row is
/// data. A workbook without worksheets is an error, an empty worksheet is an
/// empty table with no columns.
pub fn decode_table(bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).context("opening xlsx workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .context("reading first worksheet")?;

    // Header text is kept verbatim, surrounding spaces included.
    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|cell| cell.to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let data = rows
        .map(|row| row.iter().map(to_cell_value).collect())
        .collect();

    Ok(Table::new(columns, data))
}

// ---------------------------------------------------------------------------
// calamine helpers
// ---------------------------------------------------------------------------

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::String(cell.to_string())),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
