use once_cell::sync::Lazy;
use regex::Regex;

static BACKTICK_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new("`.*`").expect("valid regex"));
static SINGLE_QUOTE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new("'.*'").expect("valid regex"));
static DOUBLE_QUOTE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new("\".*\"").expect("valid regex"));

/// Collapse quoted spans on a single line to empty delimited pairs.
///
/// Keywords or braces inside a literal must not trigger boundary
/// classification or corrupt brace counts. The masking is deliberately
/// line-local and naive: escaped quotes and literals spanning multiple lines
/// are not handled.
pub fn mask_literals(line: &str) -> String {
    let masked = BACKTICK_SPAN.replace_all(line, "``");
    let masked = SINGLE_QUOTE_SPAN.replace_all(&masked, "''");
    DOUBLE_QUOTE_SPAN.replace_all(&masked, "\"\"").into_owned()
}
