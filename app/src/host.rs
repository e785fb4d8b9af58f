//! FILENAME: app/src/host.rs
// PURPOSE: The narrow interface the column routines use to reach a spreadsheet.
// CONTEXT: Everything the indexer, projector and materializer need from the
//          document goes through `SheetHost`. `engine::Workbook` implements it
//          in memory; a bridge to a live spreadsheet service would implement
//          the same trait.

use engine::{CellValue, Color, RangeRef, SheetId, Workbook};

use crate::error::{BakeError, Result};

/// A resolved sheet: its id plus its dimensions at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHandle {
    pub id: SheetId,
    pub name: String,
    /// Total rows, header included.
    pub rows: u32,
    pub cols: u32,
}

pub trait SheetHost {
    /// Id of the sheet the user is looking at.
    fn active_sheet(&self) -> Option<SheetId>;

    /// Resolves an id to a live sheet.
    fn sheet_by_id(&self, id: SheetId) -> Option<SheetHandle>;

    /// Creates a new, empty sheet. Without a name the host picks one.
    fn insert_sheet(&mut self, name: Option<&str>) -> Result<SheetHandle>;

    /// Reads a rectangular block as row-major values.
    fn read_range(&self, id: SheetId, range: &RangeRef) -> Result<Vec<Vec<CellValue>>>;

    /// Writes a rectangular block of row-major values in a single call.
    fn write_range(&mut self, id: SheetId, range: &RangeRef, values: &[Vec<CellValue>]) -> Result<()>;

    /// Keeps the top `rows` rows fixed when scrolling.
    fn set_frozen_rows(&mut self, id: SheetId, rows: u32) -> Result<()>;

    fn set_tab_color(&mut self, id: SheetId, color: Color) -> Result<()>;
}

/// Resolves `id` or fails with `SourceNotFound`.
pub fn resolve<H: SheetHost + ?Sized>(host: &H, id: SheetId) -> Result<SheetHandle> {
    host.sheet_by_id(id)
        .ok_or(BakeError::SourceNotFound { sheet_id: id })
}

impl SheetHost for Workbook {
    fn active_sheet(&self) -> Option<SheetId> {
        Workbook::active_sheet(self).map(|s| s.id)
    }

    fn sheet_by_id(&self, id: SheetId) -> Option<SheetHandle> {
        self.sheet(id).map(|s| SheetHandle {
            id: s.id,
            name: s.name.clone(),
            rows: s.grid.row_count(),
            cols: s.grid.col_count(),
        })
    }

    fn insert_sheet(&mut self, name: Option<&str>) -> Result<SheetHandle> {
        let id = self
            .add_sheet(name.map(str::to_string))
            .map_err(|e| BakeError::WriteFailure(e.to_string()))?;
        resolve(&*self, id)
    }

    fn read_range(&self, id: SheetId, range: &RangeRef) -> Result<Vec<Vec<CellValue>>> {
        let sheet = self
            .sheet(id)
            .ok_or(BakeError::SourceNotFound { sheet_id: id })?;
        sheet
            .grid
            .get_values(range)
            .map_err(|e| BakeError::ReadFailure(format!("sheet '{}': {}", sheet.name, e)))
    }

    fn write_range(&mut self, id: SheetId, range: &RangeRef, values: &[Vec<CellValue>]) -> Result<()> {
        let sheet = self
            .sheet_mut(id)
            .ok_or(BakeError::SourceNotFound { sheet_id: id })?;
        let name = sheet.name.clone();
        sheet
            .grid
            .set_values(range, values)
            .map_err(|e| BakeError::WriteFailure(format!("sheet '{}': {}", name, e)))
    }

    fn set_frozen_rows(&mut self, id: SheetId, rows: u32) -> Result<()> {
        let sheet = self
            .sheet_mut(id)
            .ok_or(BakeError::SourceNotFound { sheet_id: id })?;
        sheet.set_frozen_rows(rows);
        Ok(())
    }

    fn set_tab_color(&mut self, id: SheetId, color: Color) -> Result<()> {
        let sheet = self
            .sheet_mut(id)
            .ok_or(BakeError::SourceNotFound { sheet_id: id })?;
        sheet.tab_color = Some(color);
        Ok(())
    }
}
