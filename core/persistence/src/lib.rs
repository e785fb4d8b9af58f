//! FILENAME: core/persistence/src/lib.rs
//! Persistence Module
//!
//! Loads source workbooks from spreadsheet and CSV files and saves
//! workbooks (including derived sheets) back to XLSX.

mod csv_reader;
mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::load_csv;
pub use error::PersistenceError;
pub use xlsx_reader::load_spreadsheet;
pub use xlsx_writer::save_xlsx;

use engine::Workbook;
use std::path::Path;

/// Extensions `load_workbook` understands, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads a workbook, picking the reader from the file extension.
pub fn load_workbook(path: &Path) -> Result<Workbook, PersistenceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => load_csv(path),
        ext if SUPPORTED_EXTENSIONS.contains(&ext) => load_spreadsheet(path),
        other => Err(PersistenceError::UnsupportedExtension(other.to_string())),
    }
}
