//! # csv2docx
//!
//! Assemble a set of CSV tables into a single Word feedback report.
//!
//! Each input becomes a titled table section. The front matter is built from
//! a [`ReportConfig`], headings come from a fixed file-name lookup, and a file
//! named `cross_table.csv` is always rendered last.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csv2docx::{generate_report, NamedInput, ReportConfig, Section, Term};
//!
//! fn main() -> csv2docx::Result<()> {
//!     let config = ReportConfig::new()
//!         .with_term(Term::Spring)
//!         .with_year("2025")
//!         .with_semester("4")
//!         .with_section(Section::new('A')?);
//!
//!     let inputs = vec![
//!         NamedInput::new("cross_table.csv", std::fs::read("cross_table.csv")?),
//!         NamedInput::new("q0.csv", std::fs::read("q0.csv")?),
//!     ];
//!
//!     let report = generate_report(&config, inputs)?;
//!     report.write_to(report.file_name)?;
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod headings;
pub mod model;
pub mod order;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use assemble::build_document;
pub use config::{ReportConfig, Section, Term};
pub use error::{Error, Result};
pub use headings::resolve_heading;
pub use model::{Block, CellValue, DataTable, Document, NamedInput, Paragraph, Table};
pub use order::{is_special, order, Named, SENTINEL_FILE};
pub use parser::{CsvParser, ParseOptions};
pub use render::{JsonFormat, DOCX_MIME_TYPE};

use log::info;
use std::path::Path;

/// Suggested file name for the generated report.
pub const REPORT_FILE_NAME: &str = "CS.docx";

/// Parse a single CSV input.
///
/// # Example
///
/// ```
/// use csv2docx::parse_bytes;
///
/// let table = parse_bytes("q0.csv", b",Rating\n0,Good\n").unwrap();
/// assert_eq!(table.header_labels(), vec!["", "Rating"]);
/// ```
pub fn parse_bytes(name: &str, data: &[u8]) -> Result<DataTable> {
    CsvParser::new(name, data).parse()
}

/// Generate a report from named inputs in upload order.
///
/// Inputs are reordered so that `cross_table.csv` comes last, parsed, and
/// rendered. Any input that fails to parse fails the whole report.
pub fn generate_report(config: &ReportConfig, inputs: Vec<NamedInput>) -> Result<Report> {
    ReportGenerator::new(config.clone()).generate(inputs)
}

/// Generate a report from CSV files on disk, in the given order.
///
/// Each input is named after the final component of its path.
pub fn generate_report_from_paths<P: AsRef<Path>>(
    config: &ReportConfig,
    paths: impl IntoIterator<Item = P>,
) -> Result<Report> {
    let inputs = paths
        .into_iter()
        .map(|p| read_input(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    generate_report(config, inputs)
}

/// Read a file into a named input.
pub fn read_input(path: &Path) -> Result<NamedInput> {
    let data = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(NamedInput::new(name, data))
}

/// Builder for generating reports.
///
/// # Example
///
/// ```no_run
/// use csv2docx::{NamedInput, ParseOptions, ReportConfig, ReportGenerator};
///
/// let report = ReportGenerator::new(ReportConfig::default())
///     .with_parse_options(ParseOptions::new().with_missing_value("-"))
///     .generate(vec![NamedInput::new("q0.csv", "a,b\n1,2\n")])?;
/// # Ok::<(), csv2docx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
    parse_options: ParseOptions,
}

impl ReportGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            parse_options: ParseOptions::default(),
        }
    }

    /// Set CSV parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// The configuration used for front matter.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Order and parse inputs, then assemble the document model.
    pub fn build_document(&self, inputs: Vec<NamedInput>) -> Result<Document> {
        let tables = order(inputs)
            .iter()
            .map(|input| CsvParser::from_input(input, self.parse_options.clone()).parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(assemble::build_document(&self.config, &tables))
    }

    /// Build and serialize the report.
    pub fn generate(&self, inputs: Vec<NamedInput>) -> Result<Report> {
        let document = self.build_document(inputs)?;
        let content = render::to_docx(&document)?;
        info!(
            "Generated {} with {} table(s), {} bytes",
            REPORT_FILE_NAME,
            document.table_count(),
            content.len()
        );
        Ok(Report::new(content, document))
    }
}

/// A serialized report ready for delivery.
#[derive(Debug, Clone)]
pub struct Report {
    /// DOCX bytes
    pub content: Vec<u8>,

    /// Suggested download file name
    pub file_name: &'static str,

    /// MIME type of `content`
    pub mime_type: &'static str,

    /// The document model that was serialized
    document: Document,
}

impl Report {
    fn new(content: Vec<u8>, document: Document) -> Self {
        Self {
            content,
            file_name: REPORT_FILE_NAME,
            mime_type: DOCX_MIME_TYPE,
            document,
        }
    }

    /// Get the document model.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Write the DOCX bytes to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.content)?;
        Ok(())
    }
}
