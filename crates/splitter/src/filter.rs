use crate::config::SplitterConfig;
use crate::tokens::token_count;

/// Acceptance gate applied when the state machine closes a function.
///
/// Rejections are silent: too-short spans and denylisted buffers are likely
/// false positives, and oversized buffers would blow the downstream input
/// budget. None of them abort the scan.
pub(crate) fn accepts(
    config: &SplitterConfig,
    start_line: usize,
    end_line: usize,
    buffer: &str,
) -> bool {
    if end_line.saturating_sub(start_line) < config.min_candidate_lines {
        log::debug!("dropping trivial candidate at lines {start_line}-{end_line}");
        return false;
    }

    if config
        .denylist
        .iter()
        .any(|marker| buffer.contains(marker.as_str()))
    {
        log::debug!("dropping denylisted candidate at lines {start_line}-{end_line}");
        return false;
    }

    if token_count(buffer) >= config.max_candidate_tokens {
        log::debug!("dropping oversized candidate at lines {start_line}-{end_line}");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_spans_under_the_line_floor() {
        let config = SplitterConfig::default();
        assert!(!accepts(&config, 1, 2, "function noop() {\n}\n"));
        assert!(!accepts(&config, 5, 7, "function noop() {\n  x;\n}\n"));
        assert!(accepts(&config, 1, 4, "function f() {\n  let x = 1;\n  return x;\n}"));
    }

    #[test]
    fn rejects_denylisted_buffers_regardless_of_size() {
        let config = SplitterConfig {
            denylist: vec!["webpack".to_string()],
            ..Default::default()
        };
        let buffer = "function f() {\n  // webpackBootstrap\n  return 1;\n}";
        assert!(!accepts(&config, 1, 10, buffer));
    }

    #[test]
    fn rejects_oversized_buffers() {
        let config = SplitterConfig::default();
        let buffer = "let abcdefgh = 12345678;\n".repeat(1000);
        assert!(!accepts(&config, 1, 1001, &buffer));
    }
}
