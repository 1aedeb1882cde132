//! Document model types.
//!
//! This module defines the intermediate representation that bridges CSV
//! parsing and DOCX rendering: typed input tables on one side, and an
//! ordered list of paragraph and table blocks on the other.

mod data;
mod document;
mod paragraph;
mod table;

pub use data::{CellValue, DataTable, NamedInput, MISSING_VALUE, UNNAMED_INDEX_COLUMN};
pub use document::{Block, Document};
pub use paragraph::{Paragraph, ParagraphStyle};
pub use table::{Table, TableRow};
