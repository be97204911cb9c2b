use crate::comments::strip_comments;
use crate::config::SplitterConfig;
use crate::error::{Result, SplitterError};
use crate::filter;
use crate::language::{BlockStyle, Language};
use crate::mask::mask_literals;
use crate::types::{FunctionCandidate, SourceFile};

/// Splits comment-stripped source text into top-level function candidates.
///
/// The walk is line-oriented and purely lexical: brace counting for braced
/// languages, leading-whitespace tracking for indented ones. At most one
/// function is open at any point of the scan; nested definitions are
/// absorbed into the enclosing candidate. Malformed input never fails the
/// scan — an unterminated function is dropped at end of file.
pub struct FunctionSplitter {
    language: Language,
    config: SplitterConfig,
}

impl FunctionSplitter {
    /// Create a splitter with an explicit configuration
    pub fn new(language: Language, config: SplitterConfig) -> Result<Self> {
        config.validate().map_err(SplitterError::invalid_config)?;
        Ok(Self { language, config })
    }

    /// Create a splitter with the language's stock configuration
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            config: SplitterConfig::for_language(language),
        }
    }

    /// Get the active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Get the acceptance configuration
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Extract function candidates from an already comment-stripped file.
    ///
    /// Candidates are emitted first-closed-first, i.e. in source order.
    pub fn split_file(&self, file: &SourceFile) -> Vec<FunctionCandidate> {
        match self.language.block_style() {
            BlockStyle::Braced => self.split_braced(file),
            BlockStyle::Indented => self.split_indented(file),
        }
    }

    /// Strip comments, then extract. Convenience for callers that do not
    /// persist the stripped intermediate themselves.
    pub fn split_source(
        &self,
        repo: impl Into<String>,
        path: impl Into<String>,
        raw: &str,
    ) -> Vec<FunctionCandidate> {
        let stripped = strip_comments(self.language, raw);
        self.split_file(&SourceFile::new(repo, path, stripped))
    }

    fn split_braced(&self, file: &SourceFile) -> Vec<FunctionCandidate> {
        let mut candidates = Vec::new();
        let mut state = BraceState::default();

        for (line_index, line) in file.text.split_inclusive('\n').enumerate() {
            let line_number = line_index + 1;
            let masked = mask_literals(line);

            if !state.inside_function && self.is_function_start(&masked) {
                state.begin(line_number);
            }

            // Counts come from the masked line so braces inside literals
            // cannot skew the depth; the buffer keeps the raw text.
            state.open_count += masked.matches('{').count();
            state.close_count += masked.matches('}').count();

            if state.inside_function {
                if !state.seen_net_positive_depth {
                    state.seen_net_positive_depth = state.open_count > state.close_count;
                }
                state.buffer.push_str(line);

                if state.seen_net_positive_depth
                    && state.open_count > 0
                    && state.open_count == state.close_count
                {
                    state.inside_function = false;
                    if filter::accepts(&self.config, state.start_line, line_number, &state.buffer) {
                        candidates.push(FunctionCandidate::new(
                            &file.repo,
                            &file.path,
                            state.start_line,
                            line_number,
                            state.buffer.trim(),
                        ));
                    }
                }
            }
        }

        // Still inside at EOF: brace tracking never resolved, drop the
        // partial buffer.
        if state.inside_function {
            log::debug!(
                "{}: unterminated block from line {} dropped at EOF",
                file.path,
                state.start_line
            );
        }

        candidates
    }

    fn split_indented(&self, file: &SourceFile) -> Vec<FunctionCandidate> {
        let mut candidates = Vec::new();
        let mut state = IndentState::default();

        for (line_index, line) in file.text.split_inclusive('\n').enumerate() {
            let line_number = line_index + 1;
            let masked = mask_literals(line);

            if !state.inside_function {
                if self.is_function_start(&masked) {
                    state.begin(line_number, leading_whitespace(line), line);
                }
                continue;
            }

            if leading_whitespace(line) == state.start_indent {
                // A line back at the start depth ends the function; the line
                // itself is not part of the buffer.
                state.inside_function = false;
                if filter::accepts(&self.config, state.start_line, line_number, &state.buffer) {
                    candidates.push(FunctionCandidate::new(
                        &file.repo,
                        &file.path,
                        state.start_line,
                        line_number,
                        state.buffer.as_str(),
                    ));
                }

                // A sibling definition re-opens immediately, no gap.
                if self.is_function_start(&masked) {
                    state.begin(line_number, leading_whitespace(line), line);
                }
            } else {
                state.buffer.push_str(line);
            }
        }

        // No EOF flush: a trailing function that never dedents is dropped.
        if state.inside_function {
            log::debug!(
                "{}: in-progress function from line {} dropped at EOF",
                file.path,
                state.start_line
            );
        }

        candidates
    }

    /// Boundary classification over a literal-masked line
    fn is_function_start(&self, masked: &str) -> bool {
        match self.language.block_style() {
            BlockStyle::Indented => {
                let dedented = masked.trim_start();
                self.language
                    .start_keywords()
                    .iter()
                    .any(|keyword| dedented.starts_with(keyword))
            }
            BlockStyle::Braced => self
                .language
                .start_keywords()
                .iter()
                .any(|keyword| masked.contains(keyword)),
        }
    }
}

/// Leading-whitespace count of a raw line (newline included, as the line is
/// scanned with its terminator attached; a blank line therefore never counts
/// as depth zero).
fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Scan state for brace-delimited languages
#[derive(Debug, Default)]
struct BraceState {
    inside_function: bool,
    start_line: usize,
    open_count: usize,
    close_count: usize,
    seen_net_positive_depth: bool,
    buffer: String,
}

impl BraceState {
    fn begin(&mut self, line_number: usize) {
        self.inside_function = true;
        self.start_line = line_number;
        self.open_count = 0;
        self.close_count = 0;
        self.seen_net_positive_depth = false;
        self.buffer.clear();
    }
}

/// Scan state for indentation-delimited languages
#[derive(Debug, Default)]
struct IndentState {
    inside_function: bool,
    start_line: usize,
    start_indent: usize,
    buffer: String,
}

impl IndentState {
    fn begin(&mut self, line_number: usize, indent: usize, line: &str) {
        self.inside_function = true;
        self.start_line = line_number;
        self.start_indent = indent;
        self.buffer.clear();
        self.buffer.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn js_splitter() -> FunctionSplitter {
        FunctionSplitter::for_language(Language::JavaScript)
    }

    fn py_splitter() -> FunctionSplitter {
        FunctionSplitter::for_language(Language::Python)
    }

    fn split(splitter: &FunctionSplitter, text: &str) -> Vec<FunctionCandidate> {
        splitter.split_file(&SourceFile::new("repo", "file", text))
    }

    #[test]
    fn brace_function_spanning_four_lines_is_emitted_exactly() {
        let src = "function add(a, b) {\n  let sum = a + b;\n  return sum;\n}\n";
        let candidates = split(&js_splitter(), src);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].start_line, 1);
        assert_eq!(candidates[0].end_line, 4);
        assert_eq!(candidates[0].code, src.trim());
    }

    #[test]
    fn brace_one_liner_is_never_emitted() {
        // Open and close land on the same line, so the depth never reads as
        // net-positive and the block cannot validly close.
        let candidates = split(&js_splitter(), "function noop() {}\n");
        assert!(candidates.is_empty());
    }

    #[test]
    fn brace_unterminated_function_is_dropped_at_eof() {
        let src = "function broken(a) {\n  let x = a;\n  return x;\n";
        assert!(split(&js_splitter(), src).is_empty());
    }

    #[test]
    fn brace_nested_functions_are_absorbed_into_the_outer_candidate() {
        let src = "function outer() {\n  function inner() {\n    return 1;\n  }\n  return inner();\n}\n";
        let candidates = split(&js_splitter(), src);

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].code.contains("function inner"));
        assert_eq!(candidates[0].start_line, 1);
        assert_eq!(candidates[0].end_line, 6);
    }

    #[test]
    fn brace_candidates_are_emitted_in_source_order_with_balanced_braces() {
        let src = "function first(a) {\n  let x = a + 1;\n  return x;\n}\nlet between = 1;\nfunction second(b) {\n  if (b) {\n    return 2;\n  }\n  return 3;\n}\n";
        let candidates = split(&js_splitter(), src);

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].code.contains("first"));
        assert!(candidates[1].code.contains("second"));
        for candidate in &candidates {
            let opens = candidate.code.matches('{').count();
            let closes = candidate.code.matches('}').count();
            assert_eq!(opens, closes);
            assert!(candidate.line_span() >= 3);
        }
    }

    #[test]
    fn brace_keyword_inside_literal_does_not_open_a_function() {
        let src = "const label = \"function test\";\nconst other = 'function too';\nlet x = 1;\n";
        assert!(split(&js_splitter(), src).is_empty());
    }

    #[test]
    fn brace_literal_braces_do_not_skew_depth() {
        let src =
            "function render() {\n  const t = `{ open twice {{`;\n  return t;\n}\nlet after = 1;\n";
        let candidates = split(&js_splitter(), src);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].end_line, 4);
    }

    #[test]
    fn brace_denylisted_candidate_is_dropped() {
        let src = "function bundle() {\n  let webpackJsonp = [];\n  return webpackJsonp;\n}\n";
        assert!(split(&js_splitter(), src).is_empty());
    }

    #[test]
    fn brace_oversized_candidate_is_dropped() {
        let mut src = String::from("function big() {\n");
        for index in 0..900 {
            src.push_str(&format!("  let value{index} = {index} + {index};\n"));
        }
        src.push_str("}\n");
        assert!(split(&js_splitter(), &src).is_empty());
    }

    #[test]
    fn indent_function_closed_by_dedent_is_emitted_untrimmed() {
        let src = "def f():\n    a = 1\n    b = 2\n    c = 3\nx = 0\n";
        let candidates = split(&py_splitter(), src);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].start_line, 1);
        assert_eq!(candidates[0].end_line, 5);
        assert_eq!(candidates[0].code, "def f():\n    a = 1\n    b = 2\n    c = 3\n");
    }

    #[test]
    fn indent_function_running_to_eof_is_never_emitted() {
        let src = "def f():\n    a = 1\n    b = 2\n    c = 3\n";
        assert!(split(&py_splitter(), src).is_empty());
    }

    #[test]
    fn indent_sibling_definition_reopens_without_gap() {
        let src = "def a():\n    x = 1\n    y = 2\n    z = 3\ndef b():\n    q = 1\n    r = 2\n    s = 3\nm = 0\n";
        let candidates = split(&py_splitter(), src);

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].code.starts_with("def a"));
        assert!(candidates[1].code.starts_with("def b"));
        assert_eq!(candidates[1].start_line, 5);
    }

    #[test]
    fn indent_blank_lines_do_not_close_a_top_level_function() {
        let src = "def f():\n    a = 1\n\n    b = 2\nx = 0\n";
        let candidates = split(&py_splitter(), src);

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].code.contains("b = 2"));
    }

    #[test]
    fn indent_short_function_is_dropped() {
        let src = "def tiny():\n    pass\nx = 0\n";
        assert!(split(&py_splitter(), src).is_empty());
    }

    #[test]
    fn indent_keyword_inside_literal_does_not_open_a_function() {
        let src = "label = \"def fake():\"\nvalue = 1\n";
        assert!(split(&py_splitter(), src).is_empty());
    }

    #[test]
    fn indent_method_closed_by_sibling_at_method_depth() {
        let src = "class C:\n    def m(self):\n        a = 1\n        b = 2\n    def n(self):\n        c = 3\n        d = 4\n    done = 1\n";
        let candidates = split(&py_splitter(), src);

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].code.contains("def m"));
        assert!(candidates[1].code.contains("def n"));
    }

    #[test]
    fn java_method_is_extracted_as_braced_block() {
        let src = "public int add(int a, int b) {\n    int sum = a + b;\n    return sum;\n}\n";
        let candidates = split(&FunctionSplitter::for_language(Language::Java), src);

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].code.contains("int sum"));
    }

    #[test]
    fn split_source_strips_comments_before_extraction() {
        let splitter = js_splitter();
        let src =
            "/* function fake() { */\nfunction real(a) {\n  let x = a;\n  return x;\n}\n";
        let candidates = splitter.split_source("repo", "file.js", src);

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].code.starts_with("function real"));
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        assert!(split(&js_splitter(), "").is_empty());
        assert!(split(&py_splitter(), "").is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SplitterConfig {
            max_candidate_tokens: 0,
            ..Default::default()
        };
        assert!(FunctionSplitter::new(Language::JavaScript, config).is_err());
    }
}
