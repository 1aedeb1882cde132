//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// An assembled report: an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Content blocks in output order
    pub blocks: Vec<Block>,
}

/// A content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// A paragraph (title, heading or body text)
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the tables in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Number of table blocks.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Texts of all headings at the given level, in order.
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) if p.heading_level() == Some(level) => {
                    Some(p.plain_text())
                }
                _ => None,
            })
            .collect()
    }

    /// Headings that introduce a table, in order.
    pub fn section_headings(&self) -> Vec<&str> {
        self.blocks
            .windows(2)
            .filter_map(|pair| match pair {
                [Block::Paragraph(p), Block::Table(_)] if p.is_heading() => {
                    Some(p.plain_text())
                }
                _ => None,
            })
            .collect()
    }

    /// Get plain text content: one line per paragraph, tab-separated rows.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => p.plain_text().to_string(),
                Block::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
