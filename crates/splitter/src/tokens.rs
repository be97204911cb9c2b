use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// Reference encoding for the candidate token budget.
///
/// `cl100k_base` is the encoding behind the gpt-3.5 family; the ranks are
/// bundled with the crate, so construction only fails on a corrupted build.
static ENCODER: Lazy<CoreBPE> = Lazy::new(|| cl100k_base().expect("bundled cl100k ranks"));

/// Count tokens of `text` under the reference encoding
pub fn token_count(text: &str) -> usize {
    ENCODER.encode_ordinary(text).len()
}
