use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Configuration for candidate acceptance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Minimum line span of an accepted candidate (end - start)
    pub min_candidate_lines: usize,

    /// Hard ceiling on a candidate's encoded token count
    pub max_candidate_tokens: usize,

    /// Marker substrings that disqualify a candidate (generated/bundled code)
    pub denylist: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            min_candidate_lines: 3,
            max_candidate_tokens: 2500,
            denylist: Vec::new(),
        }
    }
}

impl SplitterConfig {
    /// Create config with the language's stock denylist
    pub fn for_language(language: Language) -> Self {
        Self {
            denylist: language
                .default_denylist()
                .iter()
                .map(|marker| (*marker).to_string())
                .collect(),
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_candidate_tokens == 0 {
            return Err("max_candidate_tokens must be > 0".to_string());
        }

        if self.denylist.iter().any(String::is_empty) {
            return Err("denylist markers must be non-empty".to_string());
        }

        Ok(())
    }
}
