//! FILENAME: app/src/materialize.rs
// PURPOSE: Writes projected columns into a new sheet.
// CONTEXT: The header and the data block each go out in a single
//          `write_range` call, never cell by cell.

use engine::{CellValue, RangeRef, SheetId};

use crate::api_types::ProjectedColumns;
use crate::config::BakeOptions;
use crate::error::Result;
use crate::host::SheetHost;

/// Creates a sheet whose row 1 lists the field names in map order and whose
/// following rows are the row-major transpose of `columns`.
///
/// Every field must hold the same number of values; the first field's length
/// is taken as the row count.
///
/// If a write fails after the sheet was created, the partial sheet is left
/// in the workbook and the error is returned.
///
/// # Panics
/// Panics when a field is shorter than the first one.
pub fn materialize_sheet<H: SheetHost + ?Sized>(
    host: &mut H,
    columns: &ProjectedColumns,
    options: &BakeOptions,
) -> Result<SheetId> {
    let destination = host.insert_sheet(options.sheet_name.as_deref())?;

    if let Some(color) = options.tab_color {
        host.set_tab_color(destination.id, color)?;
    }

    let field_count = columns.len() as u32;
    if field_count > 0 {
        let header: Vec<CellValue> = columns.keys().map(|name| CellValue::from(name.as_str())).collect();
        host.write_range(destination.id, &RangeRef::row(1, field_count), &[header])?;

        let row_count = columns.values().next().map(Vec::len).unwrap_or(0);
        if row_count > 0 {
            let rows: Vec<Vec<CellValue>> = (0..row_count)
                .map(|r| columns.values().map(|values| to_cell_value(&values[r])).collect())
                .collect();
            let range = RangeRef::new(2, 1, row_count as u32, field_count);
            host.write_range(destination.id, &range, &rows)?;
        }
    }

    host.set_frozen_rows(destination.id, options.frozen_rows)?;

    Ok(destination.id)
}

fn to_cell_value(value: &str) -> CellValue {
    if value.is_empty() {
        CellValue::Empty
    } else {
        CellValue::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Color, Workbook};

    fn columns(pairs: Vec<(&str, Vec<&str>)>) -> ProjectedColumns {
        pairs
            .into_iter()
            .map(|(k, values)| (k.to_string(), values.into_iter().map(str::to_string).collect()))
            .collect()
    }

    #[test]
    fn test_writes_header_and_rows() {
        let mut workbook = Workbook::new();
        let projected = columns(vec![("Name", vec!["Alice", "Bob"]), ("Age", vec!["30", "25"])]);

        let id = materialize_sheet(&mut workbook, &projected, &BakeOptions::default()).unwrap();

        let sheet = workbook.sheet(id).unwrap();
        let values = sheet.grid.get_values(&RangeRef::new(1, 1, 3, 2)).unwrap();
        assert_eq!(
            values,
            vec![
                vec![CellValue::from("Name"), CellValue::from("Age")],
                vec![CellValue::from("Alice"), CellValue::from("30")],
                vec![CellValue::from("Bob"), CellValue::from("25")],
            ]
        );
        assert_eq!(sheet.grid.row_count(), 3);
        assert_eq!(sheet.grid.col_count(), 2);
        assert_eq!(sheet.freeze.frozen_rows(), 1);
        assert_eq!(sheet.tab_color, Some(Color::red()));
    }

    #[test]
    fn test_empty_strings_become_empty_cells() {
        let mut workbook = Workbook::new();
        let projected = columns(vec![("A", vec!["", "x"])]);

        let id = materialize_sheet(&mut workbook, &projected, &BakeOptions::default()).unwrap();

        let sheet = workbook.sheet(id).unwrap();
        assert_eq!(sheet.grid.value_at(1, 0), CellValue::Empty);
        assert_eq!(sheet.grid.value_at(2, 0), CellValue::from("x"));
        assert_eq!(sheet.grid.row_count(), 3);
    }

    #[test]
    fn test_options_are_applied() {
        let mut workbook = Workbook::new();
        let options = BakeOptions {
            tab_color: None,
            frozen_rows: 0,
            sheet_name: Some("Baked".to_string()),
            ..BakeOptions::default()
        };

        let id = materialize_sheet(&mut workbook, &columns(vec![("A", vec!["1"])]), &options).unwrap();

        let sheet = workbook.sheet(id).unwrap();
        assert_eq!(sheet.name, "Baked");
        assert_eq!(sheet.tab_color, None);
        assert_eq!(sheet.freeze.frozen_rows(), 0);
    }

    #[test]
    fn test_no_fields_creates_blank_sheet() {
        let mut workbook = Workbook::new();
        let id = materialize_sheet(&mut workbook, &ProjectedColumns::new(), &BakeOptions::default()).unwrap();

        let sheet = workbook.sheet(id).unwrap();
        assert_eq!(sheet.grid.row_count(), 0);
        assert_eq!(sheet.freeze.frozen_rows(), 1);
    }

    #[test]
    #[should_panic]
    fn test_ragged_columns_panic() {
        let mut workbook = Workbook::new();
        let projected = columns(vec![("A", vec!["1", "2"]), ("B", vec!["1"])]);
        let _ = materialize_sheet(&mut workbook, &projected, &BakeOptions::default());
    }
}
