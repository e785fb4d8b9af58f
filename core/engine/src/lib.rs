//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the spreadsheet engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod sheet;
pub mod style;
pub mod workbook;

// Re-export commonly used types at the crate root
pub use cell::{Cell, CellError, CellValue};
pub use coord::{coord_to_a1, number_to_col, RangeRef};
pub use grid::{Grid, GridError};
pub use sheet::{FreezeConfig, Sheet, SheetId};
pub use style::Color;
pub use workbook::{Workbook, WorkbookError};
