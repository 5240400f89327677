use std::fmt;

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// UploadedFile – an opaque named blob supplied by the user
// ---------------------------------------------------------------------------

/// A file the user picked or dropped, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single decoded spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed worksheet cell mirroring what an `.xlsx` can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Formula error such as `#DIV/0!`, kept as text.
    Error(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => write!(f, "{e}"),
        }
    }
}

impl CellValue {
    /// Numeric reading of the cell. `Empty` and NaN count as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Missing in the pandas sense: blank cell or NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// LookupKey – the user's key, resolved once per run
// ---------------------------------------------------------------------------

/// Key entered by the user: an integer when it parses as one, otherwise the
/// raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Integer(i64),
    Text(String),
}

impl LookupKey {
    /// Integer parse of the trimmed input, falling back to the untouched string.
    pub fn interpret(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(i) => LookupKey::Integer(i),
            Err(_) => LookupKey::Text(raw.to_string()),
        }
    }

    /// Whether a key-column cell selects its row.
    ///
    /// Integer keys compare numerically (an integral float cell matches),
    /// text keys compare as strings, including against the date or full
    /// timestamp rendering of date cells.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match (self, cell) {
            (LookupKey::Integer(k), CellValue::Integer(i)) => k == i,
            (LookupKey::Integer(k), CellValue::Float(v)) => v.fract() == 0.0 && *v == *k as f64,
            (LookupKey::Text(s), CellValue::String(c)) => s == c,
            (LookupKey::Text(s), CellValue::DateTime(dt)) => {
                *s == dt.format("%Y-%m-%d").to_string()
                    || *s == dt.format("%Y-%m-%d %H:%M:%S").to_string()
            }
            _ => false,
        }
    }

    /// Rendering used in messages: integers bare, text single-quoted.
    pub fn quoted(&self) -> String {
        match self {
            LookupKey::Integer(i) => i.to_string(),
            LookupKey::Text(s) => format!("'{s}'"),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Integer(i) => write!(f, "{i}"),
            LookupKey::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the decoded first worksheet
// ---------------------------------------------------------------------------

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Header names plus the data rows beneath them.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Position of a column by header name (first occurrence wins).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row`, `col`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
