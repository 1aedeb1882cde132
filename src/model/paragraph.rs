//! Paragraph types.

use serde::{Deserialize, Serialize};

/// A paragraph of text with a named style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text (may be empty)
    pub text: String,

    /// Paragraph style
    pub style: ParagraphStyle,

    /// Explicit font size in points for the text run
    pub font_size: Option<f32>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            style: ParagraphStyle::Normal,
            font_size: None,
        }
    }

    /// Create a normal paragraph with text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new()
        }
    }

    /// Create a title paragraph.
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::Title,
            font_size: None,
        }
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::Heading(level.clamp(1, 6)),
            font_size: None,
        }
    }

    /// Set the font size and return self.
    pub fn font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.style, ParagraphStyle::Heading(_))
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self.style {
            ParagraphStyle::Heading(level) => Some(level),
            _ => None,
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Named paragraph style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "lowercase")]
pub enum ParagraphStyle {
    /// Body text
    #[default]
    Normal,
    /// Document title
    Title,
    /// Section heading with level 1-6
    Heading(u8),
}

impl ParagraphStyle {
    /// Style identifier used in the word-processing package.
    pub fn style_id(&self) -> Option<String> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::Title => Some("Title".to_string()),
            ParagraphStyle::Heading(level) => Some(format!("Heading{}", level)),
        }
    }
}
