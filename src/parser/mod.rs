//! CSV parsing module.

mod csv_parser;
mod options;

pub use csv_parser::CsvParser;
pub use options::{ParseOptions, DEFAULT_MISSING_VALUES};
