//! FILENAME: app/src/files.rs
// PURPOSE: Open and save commands backed by the persistence crate.

use persistence::{load_workbook, save_xlsx};
use std::path::{Path, PathBuf};

use crate::api_types::SheetInfo;
use crate::commands::get_sheets;
use crate::error::Result;
use crate::{log_enter_info, log_error, log_exit_info, AppState};

/// Replaces the current workbook with the one stored at `path`
/// (.xlsx, .xls, .xlsb, .ods or .csv).
pub fn open_file(state: &AppState, path: &Path) -> Result<Vec<SheetInfo>> {
    log_enter_info!("FILE", "open_file", "{}", path.display());
    let loaded = load_workbook(path).map_err(|e| {
        log_error!("FILE", "open_file failed: {}", e);
        e
    })?;

    *state.workbook() = loaded;
    *state.current_path() = Some(path.to_path_buf());

    let sheets = get_sheets(state);
    log_exit_info!("FILE", "open_file", "{} sheets", sheets.len());
    Ok(sheets)
}

/// Saves the workbook, derived sheets included, as XLSX.
pub fn save_file(state: &AppState, path: &Path) -> Result<()> {
    log_enter_info!("FILE", "save_file", "{}", path.display());
    {
        let workbook = state.workbook();
        save_xlsx(&workbook, path).map_err(|e| {
            log_error!("FILE", "save_file failed: {}", e);
            e
        })?;
    }
    *state.current_path() = Some(path.to_path_buf());
    log_exit_info!("FILE", "save_file");
    Ok(())
}

pub fn get_current_file_path(state: &AppState) -> Option<PathBuf> {
    state.current_path().clone()
}
