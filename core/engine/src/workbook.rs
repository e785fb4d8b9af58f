//! FILENAME: core/engine/src/workbook.rs
//! PURPOSE: An ordered collection of sheets with one active sheet.
//! CONTEXT: This is the in-memory spreadsheet document. Sheets keep their
//! insertion order for display; lookups go through `SheetId`.

use crate::grid::Grid;
use crate::sheet::{Sheet, SheetId};

/// Error returned by workbook-level sheet management.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkbookError {
    SheetNotFound(SheetId),
    DuplicateName(String),
}

impl std::fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookError::SheetNotFound(id) => write!(f, "Not found: sheet {}", id),
            WorkbookError::DuplicateName(name) => write!(f, "Sheet '{}' already exists", name),
        }
    }
}

impl std::error::Error for WorkbookError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active_sheet: SheetId,
    next_id: SheetId,
}

impl Workbook {
    /// A workbook with a single empty "Sheet1".
    pub fn new() -> Self {
        let mut workbook = Workbook::empty();
        workbook.push_sheet("Sheet1".to_string(), Grid::new());
        workbook
    }

    /// A workbook with no sheets at all. Used by loaders before they add
    /// the sheets they read.
    pub fn empty() -> Self {
        Workbook {
            sheets: Vec::new(),
            active_sheet: 0,
            next_id: 0,
        }
    }

    /// Appends a sheet holding `grid` and returns its id. The first sheet
    /// added to an empty workbook becomes the active one.
    pub fn push_sheet(&mut self, name: String, grid: Grid) -> SheetId {
        let id = self.next_id;
        self.next_id += 1;
        if self.sheets.is_empty() {
            self.active_sheet = id;
        }
        self.sheets.push(Sheet::with_grid(id, name, grid));
        id
    }

    /// Inserts a new empty sheet after the last one.
    /// Without a name, the first free "SheetN" is used.
    pub fn add_sheet(&mut self, name: Option<String>) -> Result<SheetId, WorkbookError> {
        let new_name = match name {
            Some(name) => name,
            None => self.next_default_name(),
        };

        if self.sheets.iter().any(|s| s.name == new_name) {
            return Err(WorkbookError::DuplicateName(new_name));
        }

        Ok(self.push_sheet(new_name, Grid::new()))
    }

    fn next_default_name(&self) -> String {
        let mut counter = self.sheets.len() + 1;
        loop {
            let candidate = format!("Sheet{}", counter);
            if !self.sheets.iter().any(|s| s.name == candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn sheet_mut(&mut self, id: SheetId) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.id == id)
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// The active sheet, None only for a workbook without sheets.
    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.sheet(self.active_sheet)
    }

    pub fn set_active_sheet(&mut self, id: SheetId) -> Result<(), WorkbookError> {
        if self.sheet(id).is_none() {
            return Err(WorkbookError::SheetNotFound(id));
        }
        self.active_sheet = id;
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
