//! FILENAME: app/src/commands.rs
// PURPOSE: Entry points called by the front end (menu, sidebar).
// CONTEXT: Each command locks the workbook, runs one of the column routines
//          against it and returns plain data. No state is kept between calls
//          apart from the workbook itself.

use engine::SheetId;

use crate::api_types::{ColumnRef, FieldSelection, ProjectedColumns, SheetInfo, SidebarData};
use crate::columns::index_columns;
use crate::error::{BakeError, Result};
use crate::host::{resolve, SheetHost};
use crate::materialize::materialize_sheet;
use crate::projection::project_columns;
use crate::{log_debug, log_enter_info, log_exit_info, log_warn, AppState};

// ============================================================================
// SIDEBAR
// ============================================================================

/// Data for the sidebar opened from the menu: the active sheet and its
/// pickable columns.
pub fn open_sidebar(state: &AppState) -> Result<SidebarData> {
    log_enter_info!("CMD", "open_sidebar");
    let workbook = state.workbook();

    let sheet_id = SheetHost::active_sheet(&*workbook).ok_or(BakeError::NoActiveSheet)?;
    let columns = index_columns(&*workbook, sheet_id)?;

    log_exit_info!("CMD", "open_sidebar", "sheet={} columns={}", sheet_id, columns.len());
    Ok(SidebarData {
        title: state.options.sidebar_title.clone(),
        sheet_id,
        columns,
    })
}

/// Named columns of a sheet, as offered in the column picker.
pub fn list_columns(state: &AppState, sheet_id: SheetId) -> Result<Vec<ColumnRef>> {
    log_enter_info!("CMD", "list_columns", "sheet={}", sheet_id);
    let workbook = state.workbook();
    let columns = index_columns(&*workbook, sheet_id)?;
    log_exit_info!("CMD", "list_columns", "{} columns", columns.len());
    Ok(columns)
}

// ============================================================================
// PROJECTION & MATERIALIZATION
// ============================================================================

/// Reads the selected columns of a sheet.
pub fn get_column_values(
    state: &AppState,
    sheet_id: SheetId,
    selection: &FieldSelection,
) -> Result<ProjectedColumns> {
    log_enter_info!("CMD", "get_column_values", "sheet={} fields={}", sheet_id, selection.len());
    let workbook = state.workbook();
    validate_selection(&*workbook, sheet_id, selection)?;
    let projected = project_columns(&*workbook, sheet_id, selection)?;
    log_exit_info!("CMD", "get_column_values", "rows={}", row_count(&projected));
    Ok(projected)
}

/// Writes already projected columns into a new sheet.
pub fn insert_sheet(state: &AppState, columns: &ProjectedColumns) -> Result<SheetId> {
    log_enter_info!("CMD", "insert_sheet", "fields={}", columns.len());
    if let Some(expected) = columns.values().next().map(Vec::len) {
        if let Some((name, values)) = columns.iter().find(|(_, v)| v.len() != expected) {
            return Err(BakeError::InvalidSelection(format!(
                "field '{}' has {} values, expected {}",
                name,
                values.len(),
                expected
            )));
        }
    }

    let mut workbook = state.workbook();
    let sheet_id = materialize_sheet(&mut *workbook, columns, &state.options)
        .map_err(|e| {
            log_warn!("CMD", "insert_sheet failed: {}", e);
            e
        })?;
    log_exit_info!("CMD", "insert_sheet", "sheet={}", sheet_id);
    Ok(sheet_id)
}

/// Projects the selection from `sheet_id` and writes it to a new sheet.
/// Returns the id of the new sheet.
pub fn build_derived_sheet(
    state: &AppState,
    sheet_id: SheetId,
    selection: &FieldSelection,
) -> Result<SheetId> {
    log_enter_info!("CMD", "build_derived_sheet", "sheet={} fields={}", sheet_id, selection.len());
    let mut workbook = state.workbook();

    validate_selection(&*workbook, sheet_id, selection)?;
    let projected = project_columns(&*workbook, sheet_id, selection)?;
    let derived = materialize_sheet(&mut *workbook, &projected, &state.options)
        .map_err(|e| {
            log_warn!("CMD", "build_derived_sheet failed: {}", e);
            e
        })?;

    log_exit_info!(
        "CMD",
        "build_derived_sheet",
        "derived={} rows={}",
        derived,
        row_count(&projected)
    );
    Ok(derived)
}

/// `build_derived_sheet` taking the selection in its wire format,
/// a JSON object of field name to column position.
pub fn build_derived_sheet_json(state: &AppState, sheet_id: SheetId, selection_json: &str) -> Result<SheetId> {
    let selection = parse_selection(selection_json)?;
    build_derived_sheet(state, sheet_id, &selection)
}

pub fn parse_selection(json: &str) -> Result<FieldSelection> {
    serde_json::from_str(json).map_err(|e| BakeError::InvalidSelection(e.to_string()))
}

fn validate_selection<H: SheetHost + ?Sized>(host: &H, sheet_id: SheetId, selection: &FieldSelection) -> Result<()> {
    let source = resolve(host, sheet_id)?;
    log_debug!("CMD", "selection on '{}' ({} columns): {:?}", source.name, source.cols, selection);
    for (field, &position) in selection {
        if field.is_empty() {
            return Err(BakeError::InvalidSelection("empty field name".to_string()));
        }
        if position == 0 || position > source.cols {
            return Err(BakeError::InvalidSelection(format!(
                "field '{}' refers to column {}, sheet '{}' has {} columns",
                field, position, source.name, source.cols
            )));
        }
    }
    Ok(())
}

fn row_count(columns: &ProjectedColumns) -> usize {
    columns.values().next().map(Vec::len).unwrap_or(0)
}

// ============================================================================
// SHEETS
// ============================================================================

pub fn get_sheets(state: &AppState) -> Vec<SheetInfo> {
    let workbook = state.workbook();
    workbook
        .sheets()
        .iter()
        .map(|sheet| SheetInfo {
            id: sheet.id,
            name: sheet.name.clone(),
            rows: sheet.grid.row_count(),
            cols: sheet.grid.col_count(),
            freeze_row: sheet.freeze.freeze_row,
        })
        .collect()
}

pub fn set_active_sheet(state: &AppState, sheet_id: SheetId) -> Result<()> {
    let mut workbook = state.workbook();
    workbook
        .set_active_sheet(sheet_id)
        .map_err(|_| BakeError::SourceNotFound { sheet_id })
}
