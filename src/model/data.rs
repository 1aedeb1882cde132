//! Input-side types: raw named inputs and parsed, typed tables.

use serde::{Deserialize, Serialize};

/// Column name the tabular reader gives an unlabeled leading index column.
pub const UNNAMED_INDEX_COLUMN: &str = "Unnamed: 0";

/// Canonical text for a missing cell.
pub const MISSING_VALUE: &str = "nan";

/// An uploaded file before parsing: its original file name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedInput {
    /// Original file name, used as identity
    pub name: String,

    /// Raw file content
    pub data: Vec<u8>,
}

impl NamedInput {
    /// Create a named input.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// A single typed cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// Integer column value
    Int(i64),
    /// Floating point column value
    Float(f64),
    /// Boolean column value
    Bool(bool),
    /// Anything else, verbatim
    Text(String),
    /// No value
    Missing,
}

impl CellValue {
    /// Text shown in the rendered table.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => MISSING_VALUE.to_string(),
        }
    }

    /// Check if the cell holds no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Shortest round-trip form, always with a fractional part or an exponent.
///
/// Magnitudes below `1e-4` or at/above `1e16` switch to exponent notation
/// with a signed, two-digit minimum exponent (`1e+16`, `2.5e-07`).
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return MISSING_VALUE.to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{:e}", f);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = f.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// A parsed input table paired with its original file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Original file name
    pub name: String,

    /// Column names from the header row
    pub columns: Vec<String>,

    /// Data rows, each with exactly `columns.len()` cells
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a data row.
    pub fn add_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Header texts as rendered: the unlabeled index column shows nothing.
    pub fn header_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| {
                if c == UNNAMED_INDEX_COLUMN {
                    String::new()
                } else {
                    c.clone()
                }
            })
            .collect()
    }

    /// Data rows as rendered text.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(CellValue::display_string).collect())
            .collect()
    }
}
