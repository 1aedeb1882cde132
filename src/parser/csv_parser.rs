//! CSV parser producing typed tables.

use std::collections::{HashMap, HashSet};

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{CellValue, DataTable, NamedInput};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV parser for a single named input.
pub struct CsvParser<'a> {
    name: &'a str,
    data: &'a [u8],
    options: ParseOptions,
}

impl<'a> CsvParser<'a> {
    /// Create a parser over raw bytes.
    pub fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self::with_options(name, data, ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(name: &'a str, data: &'a [u8], options: ParseOptions) -> Self {
        Self {
            name,
            data,
            options,
        }
    }

    /// Create a parser for a named input.
    pub fn from_input(input: &'a NamedInput, options: ParseOptions) -> Self {
        Self::with_options(&input.name, &input.data, options)
    }

    /// Parse the input into a table.
    ///
    /// Fails on the first structural problem; nothing is skipped.
    pub fn parse(&self) -> Result<DataTable> {
        let data = self.data.strip_prefix(UTF8_BOM).unwrap_or(self.data);
        let mut reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let header = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        if header.is_empty() {
            return Err(Error::EmptyData {
                name: self.name.to_string(),
            });
        }
        let columns = normalize_header(&header);
        let width = columns.len();

        let records = reader
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, _>>()
            .map_err(|e| self.csv_error(e))?;

        // A header one field short of the first row means the leading field
        // of every row is an unlabeled row index, which is not rendered.
        let index_fields = match records.first() {
            Some(first) if first.len() == width + 1 => 1,
            _ => 0,
        };
        if index_fields > 0 {
            debug!("{}: leading field of each row read as row index", self.name);
        }

        let mut raw_rows: Vec<Vec<Option<String>>> = Vec::with_capacity(records.len());
        for record in &records {
            let expected = width + index_fields;
            if record.len() > expected {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(Error::MalformedTable {
                    name: self.name.to_string(),
                    message: format!(
                        "expected {} fields on line {}, saw {}",
                        expected,
                        line,
                        record.len()
                    ),
                });
            }

            let mut row: Vec<Option<String>> = record
                .iter()
                .skip(index_fields)
                .map(|field| {
                    if self.options.is_missing(field) {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            row.resize(width, None);
            raw_rows.push(row);
        }

        let kinds: Vec<ColumnKind> = (0..width)
            .map(|col| ColumnKind::infer(raw_rows.iter().map(|row| row[col].as_deref())))
            .collect();

        let mut table = DataTable::new(self.name, columns);
        for row in raw_rows {
            let cells = row
                .into_iter()
                .zip(&kinds)
                .map(|(raw, kind)| kind.convert(raw))
                .collect();
            table.add_row(cells);
        }

        debug!(
            "Parsed {}: {} rows x {} columns",
            self.name,
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn csv_error(&self, source: csv::Error) -> Error {
        Error::Csv {
            name: self.name.to_string(),
            source,
        }
    }
}

/// Fill unlabeled columns and disambiguate repeated names.
fn normalize_header(header: &StringRecord) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(header.len());

    for (i, raw) in header.iter().enumerate() {
        let base = if raw.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            raw.to_string()
        };

        let mut name = base.clone();
        while used.contains(&name) {
            let count = counts.entry(base.clone()).or_insert(0);
            *count += 1;
            name = format!("{}.{}", base, count);
        }
        used.insert(name.clone());
        columns.push(name);
    }

    columns
}

/// Value type shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// Pick the narrowest kind that holds every present value.
    ///
    /// Integers with gaps widen to floats; a column with no values at all is
    /// a float column of missing values.
    fn infer<'v>(values: impl Iterator<Item = Option<&'v str>>) -> Self {
        let mut has_missing = false;
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;

        for value in values {
            let Some(v) = value else {
                has_missing = true;
                continue;
            };
            let trimmed = v.trim();
            all_int = all_int && trimmed.parse::<i64>().is_ok();
            all_float = all_float && trimmed.parse::<f64>().is_ok();
            all_bool = all_bool && parse_bool(trimmed).is_some();
        }

        if all_int && !has_missing {
            ColumnKind::Int
        } else if all_float {
            ColumnKind::Float
        } else if all_bool {
            ColumnKind::Bool
        } else {
            ColumnKind::Text
        }
    }

    fn convert(self, raw: Option<String>) -> CellValue {
        let Some(raw) = raw else {
            return CellValue::Missing;
        };
        let trimmed = raw.trim();
        let parsed = match self {
            ColumnKind::Int => trimmed.parse().ok().map(CellValue::Int),
            ColumnKind::Float => trimmed.parse().ok().map(CellValue::Float),
            ColumnKind::Bool => parse_bool(trimmed).map(CellValue::Bool),
            ColumnKind::Text => None,
        };
        parsed.unwrap_or(CellValue::Text(raw))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}
