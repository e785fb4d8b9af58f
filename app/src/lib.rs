//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point.
// CONTEXT: A spreadsheet add-on that lets a user pick named columns from a
//          sheet and "bakes" them into a new sheet. The column routines
//          (`columns`, `projection`, `materialize`) only talk to the document
//          through `host::SheetHost`; `commands` wires them to a front end.

use engine::Workbook;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod api_types;
pub mod columns;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod host;
pub mod logging;
pub mod materialize;
pub mod projection;

pub use api_types::{ColumnRef, FieldSelection, ProjectedColumns, SheetInfo, SidebarData};
pub use columns::index_columns;
pub use config::BakeOptions;
pub use error::{BakeError, Result};
pub use host::{SheetHandle, SheetHost};
pub use logging::{get_log_path, init_log_file, next_seq, write_log};
pub use materialize::materialize_sheet;
pub use projection::project_columns;

/// Shared state behind the commands: one workbook plus the options used for
/// every derived sheet.
pub struct AppState {
    pub workbook: Mutex<Workbook>,
    pub options: BakeOptions,
    pub current_path: Mutex<Option<PathBuf>>,
}

impl AppState {
    /// Locks the workbook, recovering the guard from a poisoned lock.
    pub fn workbook(&self) -> MutexGuard<'_, Workbook> {
        self.workbook.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_path(&self) -> MutexGuard<'_, Option<PathBuf>> {
        self.current_path.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn create_app_state() -> AppState {
    create_app_state_with(Workbook::new(), BakeOptions::default())
}

pub fn create_app_state_with(workbook: Workbook, options: BakeOptions) -> AppState {
    log_info!(
        "SYS",
        "Creating AppState sheets={} title={}",
        workbook.sheet_count(),
        options.sidebar_title
    );
    AppState {
        workbook: Mutex::new(workbook),
        options,
        current_path: Mutex::new(None),
    }
}
