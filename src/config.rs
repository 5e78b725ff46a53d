//! Output configuration for rendered bibliographies

use serde::{Deserialize, Serialize};

use crate::style::CitationStyle;

/// How a bibliography is rendered and laid out
///
/// # Example
///
/// ```
/// use citation_formatter::{CitationStyle, OutputConfig};
///
/// let config = OutputConfig::new()
///     .with_style(CitationStyle::Apa)
///     .with_numbering(true);
///
/// assert_eq!(config.style, CitationStyle::Apa);
/// assert_eq!(config.separator, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Style used to render every record
    pub style: CitationStyle,
    /// Prefix each citation with its 1-based position, `"1. "`
    pub numbered: bool,
    /// Text placed between consecutive citations
    pub separator: String,
    /// End a non-empty document with a newline
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            style: CitationStyle::default(),
            numbered: false,
            separator: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: CitationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_numbering(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}
