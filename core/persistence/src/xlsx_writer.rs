//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{CellValue, Color, Sheet, Workbook};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Saves all sheets in workbook order, including frozen rows and tab colors.
pub fn save_xlsx(workbook: &Workbook, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    for sheet in workbook.sheets() {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        if let Some(color) = sheet.tab_color {
            worksheet.set_tab_color(color_to_xlsx(&color));
        }

        let frozen_rows = sheet.freeze.frozen_rows();
        if frozen_rows > 0 {
            worksheet.set_freeze_panes(frozen_rows, 0)?;
        }

        write_cells(worksheet, sheet, &datetime_format)?;
    }

    xlsx.save(path)?;
    Ok(())
}

fn write_cells(worksheet: &mut Worksheet, sheet: &Sheet, datetime_format: &Format) -> Result<(), PersistenceError> {
    // Sorted so that the output is deterministic.
    let mut coords: Vec<&(u32, u32)> = sheet.grid.cells.keys().collect();
    coords.sort();

    for &(row, col) in coords {
        let col = u16::try_from(col).map_err(|_| {
            PersistenceError::InvalidFormat(format!(
                "Column {} of sheet '{}' exceeds the XLSX column limit",
                col + 1,
                sheet.name
            ))
        })?;

        match &sheet.grid.cells[&(row, col as u32)].value {
            CellValue::Empty => {}
            CellValue::Number(n) => {
                worksheet.write_number(row, col, *n)?;
            }
            CellValue::Text(s) => {
                worksheet.write_string(row, col, s)?;
            }
            CellValue::Boolean(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            CellValue::DateTime(dt) => {
                worksheet.write_datetime_with_format(row, col, dt, datetime_format)?;
            }
            CellValue::Error(e) => {
                worksheet.write_string(row, col, e.as_str())?;
            }
        }
    }
    Ok(())
}

fn color_to_xlsx(color: &Color) -> rust_xlsxwriter::Color {
    rust_xlsxwriter::Color::RGB(color.to_rgb())
}
