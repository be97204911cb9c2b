use crate::error::{Result, SplitterError};
use std::path::Path;

/// Supported source language
///
/// The set is closed: strategy selection fails for anything else, there is
/// no partial or fallback strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Java,
}

/// How a language marks the extent of a function body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Blocks delimited by `{` / `}` (JavaScript, Java)
    Braced,
    /// Blocks delimited by leading-whitespace depth (Python)
    Indented,
}

impl Language {
    /// Select a language by name; fails for anything outside the closed set
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            other => Err(SplitterError::unsupported_language(other)),
        }
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
        }
    }

    /// Primary file extension harvested for this language
    pub fn file_extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Java => "java",
        }
    }

    /// Block delimiting style driving the extraction state machine
    pub fn block_style(self) -> BlockStyle {
        match self {
            Language::Python => BlockStyle::Indented,
            Language::JavaScript | Language::Java => BlockStyle::Braced,
        }
    }

    /// Tokens whose presence on a masked line flags a plausible function start
    ///
    /// Python matches only at the start of the dedented line; the braced
    /// languages match anywhere on the line (substring, false positives
    /// accepted).
    pub fn start_keywords(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["def"],
            Language::JavaScript => &["function"],
            Language::Java => &["public", "private", "protected", "static"],
        }
    }

    /// Marker substrings that disqualify a candidate (generated/bundled code)
    pub fn default_denylist(self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &["webpack"],
            Language::Python | Language::Java => &[],
        }
    }
}
