//! FILENAME: core/engine/src/sheet.rs
// PURPOSE: A single worksheet: identity, name, cell grid and view settings.
// CONTEXT: Sheets are addressed by a stable `SheetId` rather than by position,
//          so a handle stays valid when other sheets are inserted before it.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::style::Color;

/// Stable identifier of a sheet within its workbook. Never reused.
pub type SheetId = u32;

/// Freeze panes configuration for a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FreezeConfig {
    pub freeze_row: Option<u32>,
    pub freeze_col: Option<u32>,
}

impl FreezeConfig {
    /// Number of frozen rows, 0 when none.
    pub fn frozen_rows(&self) -> u32 {
        self.freeze_row.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub id: SheetId,
    pub name: String,
    pub grid: Grid,
    pub freeze: FreezeConfig,
    pub tab_color: Option<Color>,
}

impl Sheet {
    pub fn new(id: SheetId, name: String) -> Self {
        Sheet {
            id,
            name,
            grid: Grid::new(),
            freeze: FreezeConfig::default(),
            tab_color: None,
        }
    }

    pub fn with_grid(id: SheetId, name: String, grid: Grid) -> Self {
        Sheet {
            grid,
            ..Sheet::new(id, name)
        }
    }

    /// Freezes the top `rows` rows. Zero unfreezes.
    pub fn set_frozen_rows(&mut self, rows: u32) {
        self.freeze.freeze_row = if rows == 0 { None } else { Some(rows) };
    }
}
