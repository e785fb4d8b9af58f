//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[error("CSV read error: {0}")]
    CsvRead(#[from] csv::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
}
