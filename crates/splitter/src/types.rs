use serde::{Deserialize, Serialize};

/// One source file handed to the splitter
///
/// Immutable input: the splitter reads it line by line and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Originating repository identifier
    pub repo: String,

    /// Path relative to the repository root
    pub path: String,

    /// Full file text (comment-stripped by the caller before extraction)
    pub text: String,
}

impl SourceFile {
    pub fn new(repo: impl Into<String>, path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            path: path.into(),
            text: text.into(),
        }
    }
}

/// One extracted function body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionCandidate {
    /// Originating repository identifier
    pub repo: String,

    /// Originating file path
    pub path: String,

    /// Line where the function starts (1-indexed)
    pub start_line: usize,

    /// Line where the function was closed (1-indexed, inclusive)
    pub end_line: usize,

    /// The extracted function text
    pub code: String,
}

impl FunctionCandidate {
    pub fn new(
        repo: impl Into<String>,
        path: impl Into<String>,
        start_line: usize,
        end_line: usize,
        code: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            path: path.into(),
            start_line,
            end_line,
            code: code.into(),
        }
    }

    /// Number of lines the candidate spans
    #[must_use]
    pub const fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}
