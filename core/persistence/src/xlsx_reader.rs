//! FILENAME: core/persistence/src/xlsx_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook_auto, Data, DataType, Reader};
use engine::{Cell, CellError, CellValue, Grid, Workbook};
use std::path::Path;

/// Loads every worksheet of an Excel or OpenDocument file.
///
/// Only values are read. Each sheet's dimensions run from A1 to the end of
/// its used range, so leading empty rows and columns are kept as part of the
/// grid.
pub fn load_spreadsheet(path: &Path) -> Result<Workbook, PersistenceError> {
    let mut spreadsheet = open_workbook_auto(path)?;
    let sheet_names = spreadsheet.sheet_names();

    if sheet_names.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let mut workbook = Workbook::empty();

    for sheet_name in &sheet_names {
        let range = spreadsheet.worksheet_range(sheet_name)?;

        let mut grid = Grid::new();
        if let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end()) {
            grid.ensure_dimensions(end_row + 1, end_col + 1);

            for (row_offset, row) in range.rows().enumerate() {
                for (col_offset, data) in row.iter().enumerate() {
                    let value = convert_data(data);
                    if value == CellValue::Empty {
                        continue;
                    }
                    grid.set_cell(
                        start_row + row_offset as u32,
                        start_col + col_offset as u32,
                        Cell::from(value),
                    );
                }
            }
        }

        workbook.push_sheet(sheet_name.clone(), grid);
    }

    Ok(workbook)
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(CellError::from_literal(&e.to_string())),
        Data::DateTime(dt) => match data.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match data.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
