use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;

static PY_TRIPLE_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)""".*?""""#).expect("valid regex"));
static PY_TRIPLE_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)'''.*?'''").expect("valid regex"));
static PY_LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^ *#.*\n?").expect("valid regex"));

static JS_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)/\*[\s\S]*?\*/|([^\\:]|^)//.*$").expect("valid regex"));

static JAVA_BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
static JAVA_LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[a-zA-Z0-9]+\n").expect("valid regex"));

/// Remove comments from source text before extraction.
///
/// Purely textual: comment-like sequences inside unmasked string literals can
/// be over-stripped. That is an accepted limitation of the heuristic engine,
/// not a failure mode.
pub fn strip_comments(language: Language, text: &str) -> String {
    match language {
        Language::Python => {
            let stripped = PY_TRIPLE_DOUBLE.replace_all(text, r#""""""""#);
            let stripped = PY_TRIPLE_SINGLE.replace_all(&stripped, "''''''");
            PY_LINE_COMMENT.replace_all(&stripped, "").into_owned()
        }
        Language::JavaScript => JS_COMMENT.replace_all(text, "${1}").into_owned(),
        Language::Java => {
            let stripped = JAVA_BLOCK_COMMENT.replace_all(text, "");
            JAVA_LINE_COMMENT.replace_all(&stripped, "\n").into_owned()
        }
    }
}
