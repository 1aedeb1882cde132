//! Report assembly: front matter followed by one section per table.

use crate::config::ReportConfig;
use crate::headings::resolve_heading;
use crate::model::{DataTable, Document, Paragraph, Table};

/// Institution and report names printed at the top of every report.
pub const DEPARTMENT: &str = "Department of Computer Science & Engineering";
/// Institution line.
pub const INSTITUTION: &str = "Birla Institute of Technology, Mesra";
/// Report title line.
pub const REPORT_TITLE: &str = "Faculty Feedback Action Taken Report";
/// Program name used in the first heading.
pub const PROGRAM: &str = "Computer Science & Engineering";
/// Heading introducing the per-question sections.
pub const FEEDBACK_HEADING: &str = "Question Wise Feedback";

/// Font size of the title lines, in points.
pub const TITLE_FONT_SIZE: f32 = 18.0;

/// Build the report document from already ordered tables.
pub fn build_document(config: &ReportConfig, tables: &[DataTable]) -> Document {
    let mut doc = Document::new();
    add_front_matter(&mut doc, config);
    for table in tables {
        add_table_section(&mut doc, table);
    }
    doc
}

/// Title lines, program heading and the term/class line.
pub fn add_front_matter(doc: &mut Document, config: &ReportConfig) {
    for line in [
        DEPARTMENT.to_string(),
        INSTITUTION.to_string(),
        REPORT_TITLE.to_string(),
        config.term_line(),
    ] {
        doc.add_paragraph(Paragraph::title(line).font_size(TITLE_FONT_SIZE));
    }

    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::heading(
        format!(
            "Program: {} (Semester {}: Section {})",
            PROGRAM, config.semester, config.section
        ),
        1,
    ));
    doc.add_paragraph(Paragraph::heading(FEEDBACK_HEADING, 2));
    doc.add_paragraph(Paragraph::new());
    doc.add_paragraph(Paragraph::heading(
        format!("{}, {}", config.term_line(), config.class_line()),
        2,
    ));
    doc.add_paragraph(Paragraph::new());
}

/// Heading, table and a trailing blank line for one input.
pub fn add_table_section(doc: &mut Document, table: &DataTable) {
    doc.add_paragraph(Paragraph::heading(resolve_heading(&table.name), 1));
    doc.add_table(Table::from_data(table));
    doc.add_paragraph(Paragraph::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Section, Term};
    use crate::model::{Block, CellValue, ParagraphStyle};

    fn sample(name: &str) -> DataTable {
        let mut t = DataTable::new(name, vec!["Unnamed: 0".into(), "Score".into()]);
        t.add_row(vec![CellValue::Int(0), CellValue::Float(4.5)]);
        t
    }

    #[test]
    fn test_front_matter_only() {
        let doc = build_document(&ReportConfig::default(), &[]);
        assert_eq!(doc.blocks.len(), 10);
        assert_eq!(doc.table_count(), 0);

        let Block::Paragraph(first) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(first.style, ParagraphStyle::Title);
        assert_eq!(first.font_size, Some(18.0));
        assert_eq!(first.text, DEPARTMENT);
    }

    #[test]
    fn test_front_matter_text() {
        let config = ReportConfig::new()
            .with_term(Term::Monsoon)
            .with_year("2024")
            .with_semester("6")
            .with_section(Section::new('C').unwrap());
        let doc = build_document(&config, &[]);

        let text = doc.plain_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Department of Computer Science & Engineering",
                "Birla Institute of Technology, Mesra",
                "Faculty Feedback Action Taken Report",
                "Monsoon 2024",
                "",
                "Program: Computer Science & Engineering (Semester 6: Section C)",
                "Question Wise Feedback",
                "",
                "Monsoon 2024, Semester 6: Section C",
            ]
        );
        assert_eq!(
            doc.headings(2),
            vec!["Question Wise Feedback", "Monsoon 2024, Semester 6: Section C"]
        );
    }

    #[test]
    fn test_table_sections() {
        let doc = build_document(
            &ReportConfig::default(),
            &[sample("q0.csv"), sample("mystery.csv")],
        );
        assert_eq!(doc.table_count(), 2);
        assert_eq!(doc.section_headings(), vec!["Question 1", "mystery.csv"]);
        assert!(matches!(doc.blocks.last(), Some(Block::Paragraph(p)) if p.is_empty()));

        let table = doc.tables().next().unwrap();
        assert_eq!(table.header.cells, vec!["", "Score"]);
        assert_eq!(table.rows[0].cells, vec!["0", "4.5"]);
    }
}
