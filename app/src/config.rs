//! FILENAME: app/src/config.rs
// PURPOSE: User-tunable options for the sidebar and for derived sheets.
// CONTEXT: Read from JSON; every key is optional and falls back to the default.

use engine::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BakeError, Result};

pub const DEFAULT_TITLE: &str = "BAKE ROWS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BakeOptions {
    /// Title of the menu entry and the sidebar.
    pub sidebar_title: String,
    /// Tab color of derived sheets. `null` leaves the tab uncolored.
    pub tab_color: Option<Color>,
    /// Rows frozen at the top of derived sheets.
    pub frozen_rows: u32,
    /// Name of derived sheets. When absent the workbook picks "SheetN".
    pub sheet_name: Option<String>,
}

impl Default for BakeOptions {
    fn default() -> Self {
        BakeOptions {
            sidebar_title: DEFAULT_TITLE.to_string(),
            tab_color: Some(Color::red()),
            frozen_rows: 1,
            sheet_name: None,
        }
    }
}

impl BakeOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BakeError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| BakeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
