use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution, Normal};
use rust_xlsxwriter::Workbook;

/// Keys written to every demo workbook.
const KEYS: std::ops::RangeInclusive<i64> = 300..=310;

/// Build one demo workbook: `rows_per_key` rows for every key, with r2 values
/// drawn around `center` and roughly one blank value in twenty.
fn build_workbook(center: f64, rows_per_key: usize, rng: &mut StdRng) -> Result<Workbook> {
    let r2 = Normal::new(center, 0.08).map_err(|e| anyhow!("r2 distribution: {e}"))?;
    let filled = Bernoulli::new(0.95).map_err(|e| anyhow!("blank ratio: {e}"))?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "date_value")?;
    sheet.write_string(0, 1, "r2_rolling")?;

    let mut row: u32 = 1;
    for key in KEYS {
        for _ in 0..rows_per_key {
            sheet.write_number(row, 0, key as f64)?;
            if filled.sample(rng) {
                sheet.write_number(row, 1, r2.sample(rng).clamp(0.0, 1.0))?;
            }
            row += 1;
        }
    }
    Ok(workbook)
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    for (path, center, rows_per_key) in [("sample_a.xlsx", 0.62, 4), ("sample_b.xlsx", 0.55, 3)] {
        let mut workbook = build_workbook(center, rows_per_key, &mut rng)?;
        workbook.save(path)?;
        println!("Wrote {} rows to {path}", KEYS.count() * rows_per_key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use r2_pdf_dashboard::data::loader::decode_table;

    #[test]
    fn demo_workbook_decodes_with_required_columns() {
        let mut rng = StdRng::seed_from_u64(7);
        let bytes = build_workbook(0.6, 4, &mut rng)
            .unwrap()
            .save_to_buffer()
            .unwrap();

        let table = decode_table(&bytes).unwrap();
        assert_eq!(table.columns, vec!["date_value", "r2_rolling"]);
        assert_eq!(table.len(), 44);
        for row in 0..table.len() {
            let key = table.cell(row, 0).as_f64().unwrap();
            assert!((300.0..=310.0).contains(&key));
            if let Some(v) = table.cell(row, 1).as_f64() {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
