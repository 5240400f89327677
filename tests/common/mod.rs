//! In-memory `.xlsx` fixtures.

#![allow(dead_code)]

use r2_pdf_dashboard::data::model::UploadedFile;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

pub enum Cell {
    Num(f64),
    Text(&'static str),
    Date(u16, u8, u8),
    Blank,
}

/// Build a single-sheet workbook: header row then `rows`.
pub fn workbook(headers: &[&str], rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, name) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Num(v) => {
                    sheet.write_number(r, c, *v).unwrap();
                }
                Cell::Text(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                Cell::Date(y, m, d) => {
                    let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                    sheet
                        .write_datetime_with_format(r, c, &date, &date_format)
                        .unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// `date_value` / `r2_rolling` upload from `(key, value)` pairs.
pub fn r2_upload(name: &str, rows: Vec<(Cell, Cell)>) -> UploadedFile {
    let rows: Vec<Vec<Cell>> = rows.into_iter().map(|(k, v)| vec![k, v]).collect();
    UploadedFile::new(name, workbook(&["date_value", "r2_rolling"], &rows))
}
