//! FILENAME: core/engine/src/grid.rs
//! PURPOSE: Manages the collection of cells (The Spreadsheet Grid).
//! CONTEXT: This file defines the `Grid` struct which acts as the container
//! for all cell data. It uses a sparse storage strategy (HashMap) to
//! efficiently handle large sheets where most cells are empty, and tracks
//! the sheet's dimensions separately from the populated cells: a grid can
//! be 1000 rows tall while holding only a header.

use std::collections::HashMap;
use crate::cell::{Cell, CellValue};
use crate::coord::RangeRef;

/// Error returned by range reads and writes that fall outside the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The range starts at row 0 or column 0.
    ZeroCoordinate { range: RangeRef },
    /// The range extends beyond the grid's dimensions.
    OutOfBounds {
        range: RangeRef,
        rows: u32,
        cols: u32,
    },
    /// The value block does not have the shape the range declares.
    ShapeMismatch {
        range: RangeRef,
        got_rows: usize,
        got_cols: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ZeroCoordinate { range } => {
                write!(f, "Range row {} col {} is not 1-based", range.row, range.col)
            }
            GridError::OutOfBounds { range, rows, cols } => write!(
                f,
                "Range {} is outside the grid ({} rows x {} cols)",
                range.to_a1(),
                rows,
                cols
            ),
            GridError::ShapeMismatch {
                range,
                got_rows,
                got_cols,
            } => write!(
                f,
                "Values for {} must be {}x{}, got {}x{}",
                range.to_a1(),
                range.num_rows,
                range.num_cols,
                got_rows,
                got_cols
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// The Grid struct holds the state of the spreadsheet data.
/// It uses a sparse representation (HashMap) mapping coordinates to Cells.
/// Row and Col keys are 0-based indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    /// Sparse storage: keys are (row, col), values are Cell instances.
    pub cells: HashMap<(u32, u32), Cell>,

    /// Number of rows in the sheet (not just the populated ones).
    rows: u32,

    /// Number of columns in the sheet. Every row has this many cells.
    cols: u32,
}

impl Grid {
    /// Creates a new, empty 0x0 Grid.
    pub fn new() -> Self {
        Grid {
            cells: HashMap::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates an empty grid with fixed dimensions.
    pub fn with_dimensions(rows: u32, cols: u32) -> Self {
        Grid {
            cells: HashMap::new(),
            rows,
            cols,
        }
    }

    /// Builds a grid from row-major values. Row 0 of `rows` lands in sheet row 1.
    /// Short rows are padded with empty cells up to the widest row.
    pub fn from_rows<I, R, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut grid = Grid::new();
        let mut row_count = 0u32;
        let mut width = 0u32;
        for (r, row) in rows.into_iter().enumerate() {
            row_count = r as u32 + 1;
            for (c, value) in row.into_iter().enumerate() {
                width = width.max(c as u32 + 1);
                let value = value.into();
                if value != CellValue::Empty {
                    grid.set_cell(r as u32, c as u32, Cell::from(value));
                }
            }
        }
        grid.ensure_dimensions(row_count, width);
        grid
    }

    /// Number of rows in the sheet.
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the sheet.
    pub fn col_count(&self) -> u32 {
        self.cols
    }

    /// Grows the grid to at least `rows` x `cols`. Never shrinks.
    pub fn ensure_dimensions(&mut self, rows: u32, cols: u32) {
        self.rows = self.rows.max(rows);
        self.cols = self.cols.max(cols);
    }

    /// Sets a cell at the specified 0-based coordinates.
    /// Grows the dimensions to cover it.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        self.ensure_dimensions(row + 1, col + 1);
        if cell.value == CellValue::Empty {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), cell);
        }
    }

    /// Retrieves a reference to a cell at the specified 0-based coordinates.
    /// Returns None if the cell is empty (not stored).
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Removes a cell from the grid (clearing it). Dimensions are kept.
    pub fn clear_cell(&mut self, row: u32, col: u32) {
        self.cells.remove(&(row, col));
    }

    /// Value at 0-based coordinates, `Empty` when nothing is stored.
    pub fn value_at(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    // ========================================================================
    // RANGE ACCESS (1-based)
    // ========================================================================

    fn check_bounds(&self, range: &RangeRef) -> Result<(), GridError> {
        if range.row == 0 || range.col == 0 {
            return Err(GridError::ZeroCoordinate { range: *range });
        }
        if range.is_empty() {
            return Ok(());
        }
        if range.end_row() > self.rows || range.end_col() > self.cols {
            return Err(GridError::OutOfBounds {
                range: *range,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Reads a rectangular block as row-major values.
    /// Empty cells come back as `CellValue::Empty`, so every row has
    /// exactly `num_cols` entries. A zero-sized range reads as no rows.
    pub fn get_values(&self, range: &RangeRef) -> Result<Vec<Vec<CellValue>>, GridError> {
        self.check_bounds(range)?;
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let values = (range.row - 1..range.end_row())
            .map(|r| {
                (range.col - 1..range.end_col())
                    .map(|c| self.value_at(r, c))
                    .collect()
            })
            .collect();
        Ok(values)
    }

    /// Writes a rectangular block of row-major values in one pass.
    /// The grid grows to fit the block; the shape of `values` must match
    /// the range exactly.
    pub fn set_values(&mut self, range: &RangeRef, values: &[Vec<CellValue>]) -> Result<(), GridError> {
        if range.row == 0 || range.col == 0 {
            return Err(GridError::ZeroCoordinate { range: *range });
        }
        let shape_ok = values.len() == range.num_rows as usize
            && values.iter().all(|row| row.len() == range.num_cols as usize);
        if !shape_ok {
            return Err(GridError::ShapeMismatch {
                range: *range,
                got_rows: values.len(),
                got_cols: values.first().map(Vec::len).unwrap_or(0),
            });
        }
        if range.is_empty() {
            return Ok(());
        }

        self.ensure_dimensions(range.end_row(), range.end_col());
        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let row_idx = range.row - 1 + r as u32;
                let col_idx = range.col - 1 + c as u32;
                self.set_cell(row_idx, col_idx, Cell::from(value.clone()));
            }
        }
        Ok(())
    }
}
