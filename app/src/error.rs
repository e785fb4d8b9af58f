//! FILENAME: app/src/error.rs
// PURPOSE: Error type shared by the column routines and the command layer.

use engine::SheetId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BakeError {
    /// The sheet id does not resolve to a live sheet.
    #[error("Not found: sheet {sheet_id}")]
    SourceNotFound { sheet_id: SheetId },

    /// The workbook has no active sheet to open the sidebar on.
    #[error("No active sheet")]
    NoActiveSheet,

    #[error("Read failed: {0}")]
    ReadFailure(String),

    #[error("Write failed: {0}")]
    WriteFailure(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("File error: {0}")]
    Persistence(#[from] persistence::PersistenceError),
}

pub type Result<T> = std::result::Result<T, BakeError>;
