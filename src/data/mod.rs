/// Data layer: core types, workbook decoding, and row selection.
///
/// Architecture:
/// ```text
///   .xlsx bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode first worksheet → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  rows matching LookupKey → Vec<f64>
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
