//! Report configuration.
//!
//! The configuration only feeds the front-matter text of the report. It is
//! never checked against the uploaded tables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term the report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Term {
    /// Spring term
    #[default]
    Spring,
    /// Monsoon term
    Monsoon,
}

impl Term {
    /// The literal form offered to users (`SPRING`, `MONSOON`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Spring => "SPRING",
            Term::Monsoon => "MONSOON",
        }
    }

    /// First letter upper case, the rest lower case (`Spring`, `Monsoon`).
    pub fn capitalized(&self) -> &'static str {
        match self {
            Term::Spring => "Spring",
            Term::Monsoon => "Monsoon",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Term::Spring),
            "MONSOON" => Ok(Term::Monsoon),
            _ => Err(Error::InvalidConfig(format!(
                "unknown term '{}' (expected SPRING or MONSOON)",
                s
            ))),
        }
    }
}

/// Class section, a single uppercase letter `A`..=`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Section(char);

impl Section {
    /// Create a section from a letter.
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_uppercase() {
            Ok(Self(letter))
        } else {
            Err(Error::InvalidConfig(format!(
                "section must be a single uppercase letter, got '{}'",
                letter
            )))
        }
    }

    /// The section letter.
    pub fn letter(&self) -> char {
        self.0
    }
}

impl Default for Section {
    fn default() -> Self {
        Self('A')
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(Error::InvalidConfig(format!(
                "section must be a single uppercase letter, got '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<char> for Section {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl From<Section> for char {
    fn from(section: Section) -> Self {
        section.0
    }
}

/// Values rendered into the report's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Academic term
    pub term: Term,

    /// Year, free text (e.g. "2025")
    pub year: String,

    /// Semester, free text (e.g. "4")
    pub semester: String,

    /// Class section
    pub section: Section,
}

impl ReportConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the term.
    pub fn with_term(mut self, term: Term) -> Self {
        self.term = term;
        self
    }

    /// Set the year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Set the semester.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Set the section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// `"<Term> <Year>"`, e.g. `Spring 2025`.
    pub fn term_line(&self) -> String {
        format!("{} {}", self.term.capitalized(), self.year)
    }

    /// `"Semester <semester>: Section <section>"`.
    pub fn class_line(&self) -> String {
        format!("Semester {}: Section {}", self.semester, self.section)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            term: Term::Spring,
            year: "2025".to_string(),
            semester: "4".to_string(),
            section: Section::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.term, Term::Spring);
        assert_eq!(config.year, "2025");
        assert_eq!(config.semester, "4");
        assert_eq!(config.section.letter(), 'A');
    }

    #[test]
    fn test_term_parse() {
        assert_eq!("SPRING".parse::<Term>().unwrap(), Term::Spring);
        assert_eq!("monsoon".parse::<Term>().unwrap(), Term::Monsoon);
        assert!("winter".parse::<Term>().is_err());
    }

    #[test]
    fn test_term_capitalized() {
        assert_eq!(Term::Spring.capitalized(), "Spring");
        assert_eq!(Term::Monsoon.capitalized(), "Monsoon");
        assert_eq!(Term::Monsoon.to_string(), "MONSOON");
    }

    #[test]
    fn test_section_validation() {
        assert!(Section::new('C').is_ok());
        assert!(Section::new('c').is_err());
        assert!(Section::new('1').is_err());
        assert!("AB".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
        assert_eq!("Z".parse::<Section>().unwrap().letter(), 'Z');
    }

    #[test]
    fn test_builder_lines() {
        let config = ReportConfig::new()
            .with_term(Term::Monsoon)
            .with_year("2024")
            .with_semester("6")
            .with_section(Section::new('B').unwrap());

        assert_eq!(config.term_line(), "Monsoon 2024");
        assert_eq!(config.class_line(), "Semester 6: Section B");
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let config = ReportConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"term\":\"SPRING\""));
        assert!(json.contains("\"section\":\"A\""));

        let bad = json.replace("\"A\"", "\"a\"");
        assert!(serde_json::from_str::<ReportConfig>(&bad).is_err());
    }
}
