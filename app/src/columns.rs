//! FILENAME: app/src/columns.rs
// PURPOSE: Discovers the named columns of a sheet from its header row.

use engine::{RangeRef, SheetId};

use crate::api_types::ColumnRef;
use crate::error::Result;
use crate::host::{resolve, SheetHost};

/// Lists every column whose header cell (row 1) is set, left to right.
///
/// Headers that are empty, `0` or `false` are skipped and never get a
/// position. Duplicate names are
/// all returned; telling them apart is up to the caller.
pub fn index_columns<H: SheetHost + ?Sized>(host: &H, sheet_id: SheetId) -> Result<Vec<ColumnRef>> {
    let source = resolve(host, sheet_id)?;
    if source.rows == 0 || source.cols == 0 {
        return Ok(Vec::new());
    }

    let header = host
        .read_range(source.id, &RangeRef::row(1, source.cols))?
        .into_iter()
        .next()
        .unwrap_or_default();

    let columns = header
        .iter()
        .enumerate()
        .filter(|(_, value)| !value.is_falsy())
        .map(|(i, value)| ColumnRef::new(i as u32 + 1, value.to_plain_string()))
        .collect();

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BakeError;
    use engine::{CellValue, Grid, Workbook};

    fn workbook_with(grid: Grid) -> (Workbook, SheetId) {
        let mut workbook = Workbook::empty();
        let id = workbook.push_sheet("Source".to_string(), grid);
        (workbook, id)
    }

    #[test]
    fn test_skips_blank_headers() {
        let (workbook, id) = workbook_with(Grid::from_rows(vec![
            vec!["Name", "", "Age"],
            vec!["Alice", "x", "30"],
        ]));
        assert_eq!(
            index_columns(&workbook, id).unwrap(),
            vec![ColumnRef::new(1, "Name"), ColumnRef::new(3, "Age")]
        );
    }

    #[test]
    fn test_keeps_duplicates_and_trailing_columns() {
        let mut grid = Grid::with_dimensions(2, 5);
        grid.set_cell(0, 1, CellValue::from("Id").into());
        grid.set_cell(0, 4, CellValue::from("Id").into());
        let (workbook, id) = workbook_with(grid);

        assert_eq!(
            index_columns(&workbook, id).unwrap(),
            vec![ColumnRef::new(2, "Id"), ColumnRef::new(5, "Id")]
        );
    }

    #[test]
    fn test_non_text_headers_use_their_string_form() {
        let (workbook, id) = workbook_with(Grid::from_rows(vec![vec![
            CellValue::Number(2024.0),
            CellValue::Boolean(true),
            CellValue::Empty,
        ]]));
        assert_eq!(
            index_columns(&workbook, id).unwrap(),
            vec![ColumnRef::new(1, "2024"), ColumnRef::new(2, "true")]
        );
    }

    #[test]
    fn test_zero_and_false_headers_are_skipped() {
        let (workbook, id) = workbook_with(Grid::from_rows(vec![vec![
            CellValue::Number(0.0),
            CellValue::Boolean(false),
            CellValue::from("Total"),
            CellValue::from("0"),
        ]]));
        assert_eq!(
            index_columns(&workbook, id).unwrap(),
            vec![ColumnRef::new(3, "Total"), ColumnRef::new(4, "0")]
        );
    }

    #[test]
    fn test_empty_sheet_has_no_columns() {
        let (workbook, id) = workbook_with(Grid::new());
        assert!(index_columns(&workbook, id).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_sheet() {
        let workbook = Workbook::new();
        assert!(matches!(
            index_columns(&workbook, 42),
            Err(BakeError::SourceNotFound { sheet_id: 42 })
        ));
    }
}
