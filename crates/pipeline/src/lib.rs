//! # Funcharvest Pipeline
//!
//! Repository harvesting around the function splitter.
//!
//! ## Pipeline
//!
//! ```text
//! Repository root
//!     │
//!     ├──> Repo Scanner (.gitignore aware, per-language)
//!     │      └─> Source files
//!     │
//!     ├──> Preprocessing (comment strip, persisted intermediate)
//!     │      └─> preprocessed/<repo>/<file>
//!     │
//!     ├──> Function Splitter (worker pool, one file per worker)
//!     │      └─> Accepted candidates
//!     │
//!     └──> Sample Store (versioned JSON, atomic save)
//!            └─> { repo, path, code } rows
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use funcharvest_pipeline::{Harvester, SampleStore};
//! use funcharvest_splitter::Language;
//!
//! fn main() -> funcharvest_pipeline::Result<()> {
//!     let harvester = Harvester::new(Language::Python, ".");
//!     let mut store = SampleStore::load_or_default("data/raw/repo-samples_python.json")?;
//!
//!     let stats = harvester.harvest_repo("my-repo", "repos/my-repo", &mut store)?;
//!     store.save("data/raw/repo-samples_python.json")?;
//!
//!     println!("Harvested {} functions from {} files", stats.functions, stats.files);
//!     Ok(())
//! }
//! ```

mod error;
mod harvester;
mod progress;
mod scanner;
mod stats;
mod store;

pub use error::{PipelineError, Result};
pub use harvester::Harvester;
pub use progress::FinishedLog;
pub use scanner::RepoScanner;
pub use stats::HarvestStats;
pub use store::{SampleStore, SAMPLE_STORE_SCHEMA_VERSION};
