//! FILENAME: app/src/projection.rs
// PURPOSE: Reads selected columns of a sheet as row-aligned string vectors.
// CONTEXT: Row r of every field's vector describes the same source row. Empty
//          cells become "" instead of being dropped, which keeps that alignment.

use engine::{RangeRef, SheetId};

use crate::api_types::{FieldSelection, ProjectedColumns};
use crate::error::Result;
use crate::host::{resolve, SheetHost};

/// Projects each selected column's data rows (row 2 to the last row) into
/// strings, keyed by field name in selection order.
///
/// A sheet with only a header row yields an empty vector for every field.
pub fn project_columns<H: SheetHost + ?Sized>(
    host: &H,
    sheet_id: SheetId,
    selection: &FieldSelection,
) -> Result<ProjectedColumns> {
    let source = resolve(host, sheet_id)?;
    let data_rows = source.rows.saturating_sub(1);

    let mut projected = ProjectedColumns::with_capacity(selection.len());
    for (field, &position) in selection {
        let values = host
            .read_range(source.id, &RangeRef::column(2, position, data_rows))?
            .into_iter()
            .map(|row| row.first().map(|v| v.to_plain_string()).unwrap_or_default())
            .collect();
        projected.insert(field.clone(), values);
    }

    Ok(projected)
}
