//! JSON outline of an assembled report.
//!
//! The outline separates the front matter from the table sections so a
//! report can be checked without opening the DOCX package:
//!
//! ```json
//! {
//!   "front_matter": ["Department of ...", "..."],
//!   "sections": [
//!     { "heading": "Question 1", "columns": ["", "Score"], "rows": [["0", "4.5"]] }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Table};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Debug, Serialize)]
struct ReportOutline<'a> {
    front_matter: Vec<&'a str>,
    sections: Vec<SectionOutline<'a>>,
}

#[derive(Debug, Serialize)]
struct SectionOutline<'a> {
    heading: Option<&'a str>,
    columns: &'a [String],
    rows: Vec<&'a [String]>,
}

impl<'a> SectionOutline<'a> {
    fn new(heading: Option<&'a str>, table: &'a Table) -> Self {
        Self {
            heading,
            columns: &table.header.cells,
            rows: table.rows.iter().map(|row| row.cells.as_slice()).collect(),
        }
    }
}

impl<'a> ReportOutline<'a> {
    fn from_document(doc: &'a Document) -> Self {
        let mut outline = Self {
            front_matter: Vec::new(),
            sections: Vec::new(),
        };

        let mut blocks = doc.blocks.iter().peekable();
        while let Some(block) = blocks.next() {
            match block {
                Block::Paragraph(p)
                    if p.is_heading() && matches!(blocks.peek(), Some(Block::Table(_))) =>
                {
                    if let Some(Block::Table(table)) = blocks.next() {
                        outline
                            .sections
                            .push(SectionOutline::new(Some(p.plain_text()), table));
                    }
                }
                // Blank spacers and anything after the first section are layout only.
                Block::Paragraph(p) => {
                    if outline.sections.is_empty() && !p.is_empty() {
                        outline.front_matter.push(p.plain_text());
                    }
                }
                Block::Table(table) => outline.sections.push(SectionOutline::new(None, table)),
            }
        }

        outline
    }
}

/// Render the report outline of a document as JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let outline = ReportOutline::from_document(doc);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&outline),
        JsonFormat::Compact => serde_json::to_string(&outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::build_document;
    use crate::config::ReportConfig;
    use crate::model::{CellValue, DataTable, Paragraph, TableRow};
    use serde_json::{json, Value};

    fn report_with(tables: &[DataTable]) -> Document {
        build_document(&ReportConfig::default(), tables)
    }

    #[test]
    fn test_outline_sections() {
        let mut q0 = DataTable::new("q0.csv", vec!["Unnamed: 0".into(), "Score".into()]);
        q0.add_row(vec![CellValue::Int(0), CellValue::Float(4.5)]);
        let cross = DataTable::new("cross_table.csv", vec!["a".into()]);

        let json = to_json(&report_with(&[q0, cross]), JsonFormat::Compact).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["sections"],
            json!([
                { "heading": "Question 1", "columns": ["", "Score"], "rows": [["0", "4.5"]] },
                { "heading": "Deviations across questions", "columns": ["a"], "rows": [] }
            ])
        );
    }

    #[test]
    fn test_outline_front_matter_skips_spacers() {
        let json = to_json(&report_with(&[]), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));

        let value: Value = serde_json::from_str(&json).unwrap();
        let front: Vec<&str> = value["front_matter"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(front.len(), 7);
        assert_eq!(front[3], "Spring 2025");
        assert_eq!(front[6], "Spring 2025, Semester 4: Section A");
        assert_eq!(value["sections"], json!([]));
    }

    #[test]
    fn test_table_without_heading() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new());
        doc.add_table(Table::new(TableRow::from_strings(["a", "b"])));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#"{"heading":null,"columns":["a","b"],"rows":[]}"#));
    }
}
