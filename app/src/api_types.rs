//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for the front-end boundary.
// CONTEXT: Structs use camelCase serialization for JavaScript interoperability.
//          A column list travels as `[[position, name], ...]` and a selection
//          as `{ fieldName: position }`; key order is significant in both.

use engine::SheetId;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named column of a sheet. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub position: u32,
    pub name: String,
}

impl ColumnRef {
    pub fn new(position: u32, name: impl Into<String>) -> Self {
        ColumnRef {
            position,
            name: name.into(),
        }
    }
}

impl Serialize for ColumnRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.position, &self.name).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColumnRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (position, name) = <(u32, String)>::deserialize(deserializer)?;
        Ok(ColumnRef { position, name })
    }
}

/// Field name -> 1-based column position, in display order.
pub type FieldSelection = IndexMap<String, u32>;

/// Field name -> stringified data-row values, one per source row.
pub type ProjectedColumns = IndexMap<String, Vec<String>>;

/// Everything the sidebar needs to render its column picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarData {
    pub title: String,
    pub sheet_id: SheetId,
    pub columns: Vec<ColumnRef>,
}

impl SidebarData {
    /// The column list as the JSON string embedded into the sidebar page.
    pub fn columns_json(&self) -> String {
        serde_json::to_string(&self.columns).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Information about a single sheet (sent to frontend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetInfo {
    pub id: SheetId,
    pub name: String,
    pub rows: u32,
    pub cols: u32,
    pub freeze_row: Option<u32>,
}
