//! Word (DOCX) rendering.

use std::io::Cursor;

use docx_rs::{
    Docx, Paragraph as DocxParagraph, Run, Style, StyleType, Table as DocxTable,
    TableCell as DocxTableCell, TableRow as DocxTableRow,
};

use crate::error::{Error, Result};
use crate::model::{Block, Document, Paragraph, Table};

/// MIME type of a DOCX package.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Usable page width in twentieths of a point (A4/Letter minus margins).
const TEXT_WIDTH_TWIPS: usize = 9000;

/// Paragraph styles registered in every package: id, display name,
/// size in half-points, bold, color.
const PARAGRAPH_STYLES: &[(&str, &str, usize, bool, &str)] = &[
    ("Title", "Title", 52, false, "17365D"),
    ("Heading1", "Heading 1", 28, true, "365F91"),
    ("Heading2", "Heading 2", 26, true, "4F81BD"),
];

/// Serialize a document into DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = Docx::new();
    for (id, name, size, bold, color) in PARAGRAPH_STYLES {
        let mut style = Style::new(*id, StyleType::Paragraph)
            .name(*name)
            .size(*size)
            .color(*color);
        if *bold {
            style = style.bold();
        }
        docx = docx.add_style(style);
    }

    for block in &doc.blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(convert_paragraph(p)),
            Block::Table(t) => docx.add_table(convert_table(t)),
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Render(format!("DOCX packaging error: {}", e)))?;
    Ok(buffer.into_inner())
}

fn convert_paragraph(paragraph: &Paragraph) -> DocxParagraph {
    let mut out = DocxParagraph::new();
    if !paragraph.text.is_empty() {
        let mut run = Run::new().add_text(paragraph.text.as_str());
        if let Some(points) = paragraph.font_size {
            run = run.size(half_points(points));
        }
        out = out.add_run(run);
    }
    match paragraph.style.style_id() {
        Some(id) => out.style(&id),
        None => out,
    }
}

fn convert_table(table: &Table) -> DocxTable {
    let columns = table.column_count().max(1);
    let rows = std::iter::once(&table.header)
        .chain(&table.rows)
        .map(|row| {
            let mut cells: Vec<DocxTableCell> = row.cells.iter().map(|c| text_cell(c)).collect();
            // Every row carries the full column count.
            cells.resize_with(columns, || text_cell(""));
            DocxTableRow::new(cells)
        })
        .collect();

    DocxTable::new(rows).set_grid(vec![TEXT_WIDTH_TWIPS / columns; columns])
}

/// A cell always holds a paragraph, even when its text is empty.
fn text_cell(text: &str) -> DocxTableCell {
    let mut paragraph = DocxParagraph::new();
    if !text.is_empty() {
        paragraph = paragraph.add_run(Run::new().add_text(text));
    }
    DocxTableCell::new().add_paragraph(paragraph)
}

fn half_points(points: f32) -> usize {
    (points * 2.0).round().max(1.0) as usize
}
