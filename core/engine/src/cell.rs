//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the fundamental data structures for a single spreadsheet cell.
//! CONTEXT: This file contains the `Cell` struct and `CellValue` enum.
//! Every value has a plain string form, which is what column projection
//! hands to the rest of the system.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Represents the possible errors a cell can hold (e.g., #DIV/0!)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellError {
    Null,
    Div0,
    Ref,
    Name,
    Value,
    Num,
    NA,
}

impl CellError {
    /// The literal a spreadsheet shows for this error.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Value => "#VALUE!",
            CellError::Num => "#NUM!",
            CellError::NA => "#N/A",
        }
    }

    /// Parses an error literal such as "#REF!". Unknown literals map to `Value`.
    pub fn from_literal(literal: &str) -> Self {
        match literal.trim().to_ascii_uppercase().as_str() {
            "#NULL!" => CellError::Null,
            "#DIV/0!" => CellError::Div0,
            "#REF!" => CellError::Ref,
            "#NAME?" => CellError::Name,
            "#NUM!" => CellError::Num,
            "#N/A" => CellError::NA,
            _ => CellError::Value,
        }
    }
}

/// Represents the raw data within a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Error(CellError),
}

impl CellValue {
    /// True for values a spreadsheet script treats as false: `Empty`,
    /// zero-length text, `0`, `NaN` and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Boolean(b) => !b,
            CellValue::DateTime(_) | CellValue::Error(_) => false,
        }
    }

    /// Plain string form of the value.
    ///
    /// Empty cells become the empty string so that a column read keeps one
    /// entry per row. Numbers use the shortest round-trip form (`30`, `2.5`)
    /// and switch to exponent form outside [1e-6, 1e21). Booleans are
    /// lowercase, dates drop the time part at midnight.
    pub fn to_plain_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                }
            }
            CellValue::Error(e) => e.as_str().to_string(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponent_form = format!("{:e}", n);
        match exponent_form.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exponent_form,
        }
    } else {
        n.to_string()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(num: f64) -> Self {
        CellValue::Number(num)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

/// The atomic unit of the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
}

impl Cell {
    pub fn new() -> Self {
        Cell {
            value: CellValue::Empty,
        }
    }

    pub fn new_number(num: f64) -> Self {
        Cell {
            value: CellValue::Number(num),
        }
    }

    pub fn new_text(text: String) -> Self {
        Cell {
            value: CellValue::Text(text),
        }
    }

    pub fn new_boolean(value: bool) -> Self {
        Cell {
            value: CellValue::Boolean(value),
        }
    }

    /// Returns the display value of the cell as a String.
    pub fn display_value(&self) -> String {
        self.value.to_plain_string()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Cell { value }
    }
}
