//! Parsing options and configuration.

/// Cell texts read as a missing value by default.
pub const DEFAULT_MISSING_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for parsing CSV inputs.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field delimiter
    pub delimiter: u8,

    /// Whether the default missing-value markers apply
    pub default_missing_values: bool,

    /// Additional cell texts treated as missing
    pub extra_missing_values: Vec<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat an additional cell text as missing.
    pub fn with_missing_value(mut self, marker: impl Into<String>) -> Self {
        self.extra_missing_values.push(marker.into());
        self
    }

    /// Read every cell literally except those listed via `with_missing_value`.
    pub fn without_default_missing_values(mut self) -> Self {
        self.default_missing_values = false;
        self
    }

    /// Check whether a raw cell text means "no value".
    pub fn is_missing(&self, raw: &str) -> bool {
        (self.default_missing_values && DEFAULT_MISSING_VALUES.contains(&raw))
            || self.extra_missing_values.iter().any(|m| m == raw)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            default_missing_values: true,
            extra_missing_values: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_delimiter(b';')
            .with_missing_value("-");

        assert_eq!(options.delimiter, b';');
        assert!(options.is_missing("-"));
        assert!(options.is_missing("NA"));
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.delimiter, b',');
        assert!(options.is_missing(""));
        assert!(options.is_missing("nan"));
        assert!(!options.is_missing("0"));
        assert!(!options.is_missing("none"));
    }

    #[test]
    fn test_without_defaults() {
        let options = ParseOptions::new().without_default_missing_values();
        assert!(!options.is_missing(""));
        assert!(!options.is_missing("NA"));
    }
}
