//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the column routines and commands.

#![allow(dead_code)]

use bake_rows::{create_app_state_with, AppState, BakeError, BakeOptions, SheetHandle, SheetHost};
use engine::{Cell, CellValue, Color, Grid, RangeRef, SheetId, Workbook};
use std::cell::Cell as Counter;

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with a single empty sheet.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state_with(Workbook::new(), BakeOptions::default()),
        }
    }

    /// Create a harness with a sample sheet (header + 9 rows, one blank header).
    pub fn with_sample_data() -> Self {
        TestHarness {
            state: create_app_state_with(sample_workbook(), BakeOptions::default()),
        }
    }

    /// Create a harness whose only sheet is built from `rows`.
    pub fn with_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut workbook = Workbook::empty();
        workbook.push_sheet("Source".to_string(), Grid::from_rows(rows));
        TestHarness {
            state: create_app_state_with(workbook, BakeOptions::default()),
        }
    }

    pub fn with_options(mut self, options: BakeOptions) -> Self {
        self.state.options = options;
        self
    }

    pub fn active_sheet_id(&self) -> SheetId {
        self.state.workbook().active_sheet().expect("active sheet").id
    }

    pub fn sheet_count(&self) -> usize {
        self.state.workbook().sheet_count()
    }

    /// Every value of a sheet, row-major, over its full dimensions.
    pub fn sheet_values(&self, id: SheetId) -> Vec<Vec<CellValue>> {
        sheet_values(&self.state.workbook(), id)
    }

    pub fn frozen_rows(&self, id: SheetId) -> u32 {
        self.state.workbook().sheet(id).expect("sheet").freeze.frozen_rows()
    }

    pub fn tab_color(&self, id: SheetId) -> Option<Color> {
        self.state.workbook().sheet(id).expect("sheet").tab_color
    }
}

pub fn sheet_values(workbook: &Workbook, id: SheetId) -> Vec<Vec<CellValue>> {
    let sheet = workbook.sheet(id).expect("sheet");
    let range = RangeRef::new(1, 1, sheet.grid.row_count(), sheet.grid.col_count());
    sheet.grid.get_values(&range).expect("in bounds")
}

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|v| if v.is_empty() { CellValue::Empty } else { text(v) })
        .collect()
}

/// Sample sheet:
/// Name | Age | (blank) | City | Salary | Active
pub fn sample_workbook() -> Workbook {
    let mut grid = Grid::new();

    grid.set_cell(0, 0, Cell::new_text("Name".to_string()));
    grid.set_cell(0, 1, Cell::new_text("Age".to_string()));
    grid.set_cell(0, 3, Cell::new_text("City".to_string()));
    grid.set_cell(0, 4, Cell::new_text("Salary".to_string()));
    grid.set_cell(0, 5, Cell::new_text("Active".to_string()));

    let test_data = vec![
        ("Alice", 30.0, "New York", 75000.0, true),
        ("Bob", 25.0, "Los Angeles", 65000.0, true),
        ("Charlie", 35.0, "Chicago", 85000.0, false),
        ("Diana", 28.0, "Houston", 70000.0, true),
        ("Eve", 32.0, "Phoenix", 80000.0, true),
        ("Frank", 45.0, "Philadelphia", 95000.0, false),
        ("Grace", 29.0, "San Antonio", 72000.0, true),
        ("Henry", 38.0, "San Diego", 88000.0, true),
        ("Ivy", 26.0, "Dallas", 62000.0, false),
    ];

    for (i, (name, age, city, salary, active)) in test_data.iter().enumerate() {
        let row = (i + 1) as u32;
        grid.set_cell(row, 0, Cell::new_text(name.to_string()));
        grid.set_cell(row, 1, Cell::new_number(*age));
        grid.set_cell(row, 2, Cell::new_text(format!("note {}", row)));
        grid.set_cell(row, 3, Cell::new_text(city.to_string()));
        grid.set_cell(row, 4, Cell::new_number(*salary));
        grid.set_cell(row, 5, Cell::new_boolean(*active));
    }

    let mut workbook = Workbook::empty();
    workbook.push_sheet("People".to_string(), grid);
    workbook
}

/// A `SheetHost` that delegates to a workbook and counts calls. It can be
/// told to fail the n-th `write_range` (1-based).
pub struct RecordingHost {
    pub inner: Workbook,
    pub reads: Counter<usize>,
    pub writes: usize,
    pub fail_write_at: Option<usize>,
}

impl RecordingHost {
    pub fn new(inner: Workbook) -> Self {
        RecordingHost {
            inner,
            reads: Counter::new(0),
            writes: 0,
            fail_write_at: None,
        }
    }

    pub fn failing_write(inner: Workbook, n: usize) -> Self {
        RecordingHost {
            fail_write_at: Some(n),
            ..RecordingHost::new(inner)
        }
    }
}

impl SheetHost for RecordingHost {
    fn active_sheet(&self) -> Option<SheetId> {
        SheetHost::active_sheet(&self.inner)
    }

    fn sheet_by_id(&self, id: SheetId) -> Option<SheetHandle> {
        self.inner.sheet_by_id(id)
    }

    fn insert_sheet(&mut self, name: Option<&str>) -> bake_rows::Result<SheetHandle> {
        self.inner.insert_sheet(name)
    }

    fn read_range(&self, id: SheetId, range: &RangeRef) -> bake_rows::Result<Vec<Vec<CellValue>>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read_range(id, range)
    }

    fn write_range(&mut self, id: SheetId, range: &RangeRef, values: &[Vec<CellValue>]) -> bake_rows::Result<()> {
        self.writes += 1;
        if self.fail_write_at == Some(self.writes) {
            return Err(BakeError::WriteFailure("quota exceeded".to_string()));
        }
        self.inner.write_range(id, range, values)
    }

    fn set_frozen_rows(&mut self, id: SheetId, rows: u32) -> bake_rows::Result<()> {
        self.inner.set_frozen_rows(id, rows)
    }

    fn set_tab_color(&mut self, id: SheetId, color: Color) -> bake_rows::Result<()> {
        self.inner.set_tab_color(id, color)
    }
}
