//! FILENAME: core/persistence/src/csv_reader.rs

use crate::PersistenceError;
use engine::{CellValue, Grid, Workbook};
use std::path::Path;

/// Loads a CSV file as a single-sheet workbook named after the file stem.
/// Every non-empty field becomes a text cell; the first record is row 1.
pub fn load_csv(path: &Path) -> Result<Workbook, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("Sheet1")
        .to_string();

    let mut workbook = Workbook::empty();
    workbook.push_sheet(name, Grid::from_rows(rows));
    Ok(workbook)
}
