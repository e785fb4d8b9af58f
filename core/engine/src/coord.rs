//! FILENAME: core/engine/src/coord.rs
//! PURPOSE: Utilities for converting between spreadsheet coordinate formats.
//! CONTEXT: Sheet-facing coordinates are 1-based (row 1 is the header row,
//! column 1 is "A"), matching what a spreadsheet user sees. The `Grid`
//! stores 0-based indices internally.

use serde::{Deserialize, Serialize};

/// A cell coordinate as (row, col) with 1-based indices.
pub type CellCoord = (u32, u32);

/// Converts a 1-based column number to a column string.
/// 1 -> "A", 26 -> "Z", 27 -> "AA". Column 0 has no letter form and yields "".
pub fn number_to_col(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        let remainder = (n - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }
    result
}

/// Converts a 1-based (row, col) coordinate to an A1-style reference string.
/// (1, 1) -> "A1", (2, 2) -> "B2", (100, 27) -> "AA100"
pub fn coord_to_a1(coord: CellCoord) -> String {
    let (row, col) = coord;
    format!("{}{}", number_to_col(col), row)
}

/// A rectangular block of cells: top-left corner plus size, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRef {
    pub row: u32,
    pub col: u32,
    pub num_rows: u32,
    pub num_cols: u32,
}

impl RangeRef {
    pub const fn new(row: u32, col: u32, num_rows: u32, num_cols: u32) -> Self {
        RangeRef {
            row,
            col,
            num_rows,
            num_cols,
        }
    }

    /// The whole of one row, `width` columns wide.
    pub const fn row(row: u32, width: u32) -> Self {
        RangeRef::new(row, 1, 1, width)
    }

    /// A single column starting at `row`, `height` cells tall.
    pub const fn column(row: u32, col: u32, height: u32) -> Self {
        RangeRef::new(row, col, height, 1)
    }

    pub const fn is_empty(&self) -> bool {
        self.num_rows == 0 || self.num_cols == 0
    }

    /// Last row covered (inclusive). Equal to `row - 1` for an empty range.
    pub const fn end_row(&self) -> u32 {
        self.row + self.num_rows - 1
    }

    /// Last column covered (inclusive). Equal to `col - 1` for an empty range.
    pub const fn end_col(&self) -> u32 {
        self.col + self.num_cols - 1
    }

    /// A1 notation, e.g. "B2:B10".
    pub fn to_a1(&self) -> String {
        if self.is_empty() {
            return format!("{}(empty)", coord_to_a1((self.row, self.col)));
        }
        let start = coord_to_a1((self.row, self.col));
        if self.num_rows == 1 && self.num_cols == 1 {
            return start;
        }
        format!("{}:{}", start, coord_to_a1((self.end_row(), self.end_col())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_col() {
        assert_eq!(number_to_col(1), "A");
        assert_eq!(number_to_col(26), "Z");
        assert_eq!(number_to_col(27), "AA");
        assert_eq!(number_to_col(52), "AZ");
        assert_eq!(number_to_col(702), "ZZ");
        assert_eq!(number_to_col(703), "AAA");
        assert_eq!(number_to_col(0), "");
    }

    #[test]
    fn test_range_to_a1() {
        assert_eq!(RangeRef::new(1, 1, 1, 1).to_a1(), "A1");
        assert_eq!(RangeRef::column(2, 3, 9).to_a1(), "C2:C10");
        assert_eq!(RangeRef::row(1, 27).to_a1(), "A1:AA1");
        assert_eq!(RangeRef::column(2, 1, 0).to_a1(), "A2(empty)");
    }
}
