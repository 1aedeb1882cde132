//! Table types.

use super::DataTable;
use serde::{Deserialize, Serialize};

/// A rendered table: a header row followed by body rows of display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header row
    pub header: TableRow,

    /// Body rows
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table with a header and no body rows.
    pub fn new(header: TableRow) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Build the rendered form of a parsed input table.
    pub fn from_data(data: &DataTable) -> Self {
        let mut table = Self::new(TableRow::from_strings(data.header_labels()));
        for row in data.display_rows() {
            table.add_row(TableRow::from_strings(row));
        }
        table
    }

    /// Add a body row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (based on the header).
    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(&self.rows)
            .map(TableRow::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell texts
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells.join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    #[test]
    fn test_from_data() {
        let mut data = DataTable::new(
            "q0.csv",
            vec!["Unnamed: 0".to_string(), "Teacher".to_string()],
        );
        data.add_row(vec![CellValue::Int(0), CellValue::Text("X".into())]);
        data.add_row(vec![CellValue::Int(1), CellValue::Missing]);

        let table = Table::from_data(&data);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.header.cells, vec!["", "Teacher"]);
        assert_eq!(table.plain_text(), "\tTeacher\n0\tX\n1\tnan");
    }

    #[test]
    fn test_header_only() {
        let data = DataTable::new("t.csv", vec!["a".to_string()]);
        let table = Table::from_data(&data);
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.plain_text(), "a");
    }
}
