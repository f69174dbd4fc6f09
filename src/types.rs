use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::error::ReportResult;

//==============================================================================
// Cell Values
//==============================================================================

/// A single spreadsheet cell decoded from a JSON scalar
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum CellValue {
    /// JSON null, written as a blank cell
    Empty,
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(f64),
    /// JSON string
    Text(String),
}

impl CellValue {
    /// Check if the cell holds a number
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Character count of the stringified value
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Text(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl TryFrom<Value> for CellValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(CellValue::Empty),
            Value::Bool(b) => Ok(CellValue::Bool(b)),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .ok_or_else(|| format!("number {} cannot be represented as f64", n)),
            Value::String(s) => Ok(CellValue::Text(s)),
            other => Err(format!(
                "unsupported cell value {}: cells must be strings, numbers, booleans or null",
                other
            )),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// One table row; cell 0 is the row label
pub type Row = Vec<CellValue>;

/// Ordered rows; row 0 is the header
pub type Table = Vec<Row>;

/// Stringified label (first cell) of a row, empty for an empty row
pub fn row_label(row: &[CellValue]) -> String {
    row.first().map(|cell| cell.to_string()).unwrap_or_default()
}

//==============================================================================
// Request Document
//==============================================================================

/// Tables reported for a single year
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearEntry {
    /// Kept as a JSON number so integral years print without a fraction
    pub year: serde_json::Number,
    pub summary: Table,
    pub comparison: Table,
    pub combined: Table,
}

impl YearEntry {
    /// Worksheet name for this entry, e.g. "Year 2023"
    pub fn sheet_name(&self) -> String {
        format!("Year {}", self.year)
    }
}

/// Body of `POST /process_summary_comparison`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportRequest {
    /// Yearly data, one worksheet each
    #[serde(default)]
    pub data: Vec<YearEntry>,

    /// Consolidated Totals table
    #[serde(default)]
    pub consolidated: Table,
}

impl ReportRequest {
    /// Decode a request document from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> ReportResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
