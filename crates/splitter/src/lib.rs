//! # Funcharvest Splitter
//!
//! Heuristic extraction of top-level function bodies from source text.
//!
//! ## Philosophy
//!
//! The splitter approximates function boundaries with lightweight lexical
//! scanning instead of a grammar:
//! - Brace counting for brace-delimited languages (JavaScript, Java)
//! - Leading-whitespace tracking for indentation-delimited ones (Python)
//! - Literal masking so quoted text cannot corrupt structural counts
//! - Silent rejection of trivial, denylisted, and oversized candidates
//!
//! Malformed or truncated input never fails a scan; the engine under-extracts
//! rather than raising. The only fatal condition is selecting a language
//! outside the supported set.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     │
//!     ├──> Comment Stripping (per-language regex)
//!     │
//!     ├──> Line Scan
//!     │    ├─> Literal Masking (line-local)
//!     │    ├─> Boundary Classification (start keywords)
//!     │    └─> State Machine (brace depth / indent depth)
//!     │
//!     └──> Acceptance Gate
//!          ├─> 3-line minimum span
//!          ├─> Denylist markers (generated/bundled code)
//!          └─> Token ceiling (cl100k, 2500)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use funcharvest_splitter::{FunctionSplitter, Language};
//!
//! let splitter = FunctionSplitter::for_language(Language::JavaScript);
//!
//! let code = "function add(a, b) {\n  let sum = a + b;\n  return sum;\n}\n";
//! let candidates = splitter.split_source("demo-repo", "src/add.js", code);
//!
//! for candidate in candidates {
//!     println!(
//!         "Function at lines {}-{} of {}",
//!         candidate.start_line, candidate.end_line, candidate.path
//!     );
//! }
//! ```

mod comments;
mod config;
mod error;
mod filter;
mod language;
mod mask;
mod splitter;
mod tokens;
mod types;

pub use comments::strip_comments;
pub use config::SplitterConfig;
pub use error::{Result, SplitterError};
pub use language::{BlockStyle, Language};
pub use mask::mask_literals;
pub use splitter::FunctionSplitter;
pub use tokens::token_count;
pub use types::{FunctionCandidate, SourceFile};
