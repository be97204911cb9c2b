use crate::error::{PipelineError, Result};
use crate::scanner::RepoScanner;
use crate::stats::HarvestStats;
use crate::store::SampleStore;
use funcharvest_splitter::{
    strip_comments, FunctionCandidate, FunctionSplitter, Language, SourceFile, SplitterConfig,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Per-repository harvest driver: scan, preprocess, split, accumulate.
///
/// Files are processed by a fixed-size worker pool sized to available CPU
/// parallelism; each worker owns its own extraction pass, and results are
/// merged back in scan order. The sample store and the preprocessed
/// intermediates are owned here, never by the splitter.
pub struct Harvester {
    language: Language,
    splitter: FunctionSplitter,
    work_dir: PathBuf,
}

struct FileOutcome {
    candidates: Vec<FunctionCandidate>,
    lines: usize,
}

impl Harvester {
    /// Create a harvester with the language's stock splitter configuration
    pub fn new(language: Language, work_dir: impl AsRef<Path>) -> Self {
        Self {
            language,
            splitter: FunctionSplitter::for_language(language),
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a harvester with an explicit splitter configuration
    pub fn with_config(
        language: Language,
        config: SplitterConfig,
        work_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        Ok(Self {
            language,
            splitter: FunctionSplitter::new(language, config)?,
            work_dir: work_dir.as_ref().to_path_buf(),
        })
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Harvest one repository into the sample store.
    ///
    /// Files already present in the store are skipped, so an interrupted run
    /// can resume. Per-file failures are logged and counted, never fatal;
    /// the scan always proceeds to the last file.
    pub fn harvest_repo(
        &self,
        repo_name: &str,
        repo_root: impl AsRef<Path>,
        store: &mut SampleStore,
    ) -> Result<HarvestStats> {
        let repo_root = repo_root.as_ref();
        if !repo_root.is_dir() {
            return Err(PipelineError::InvalidPath(format!(
                "Repository root does not exist: {}",
                repo_root.display()
            )));
        }

        let mut stats = HarvestStats::new();
        let files = RepoScanner::new(repo_root, self.language).scan();

        let mut pending = Vec::new();
        for relative in files {
            let relative_str = relative.to_string_lossy().into_owned();
            if store.contains_file(repo_name, &relative_str) {
                log::debug!("{repo_name}/{relative_str} already harvested, skipping");
                stats.add_skipped();
            } else {
                pending.push(relative);
            }
        }

        let preprocessed_dir = self.work_dir.join("preprocessed").join(repo_name);
        std::fs::create_dir_all(&preprocessed_dir)?;

        let outcomes: Vec<(PathBuf, Result<FileOutcome>)> = pending
            .par_iter()
            .map(|relative| {
                let outcome = self.process_file(repo_name, repo_root, &preprocessed_dir, relative);
                (relative.clone(), outcome)
            })
            .collect();

        for (relative, outcome) in outcomes {
            match outcome {
                Ok(FileOutcome { candidates, lines }) => {
                    stats.add_file(lines);
                    stats.add_functions(candidates.len());
                    store.append(candidates);
                }
                Err(err) => {
                    log::warn!("{repo_name}/{}: {err}", relative.display());
                    stats.add_error(format!("{}: {err}", relative.display()));
                }
            }
        }

        log::info!(
            "{repo_name}: {} files, {} functions, {} skipped",
            stats.files,
            stats.functions,
            stats.skipped_files
        );
        Ok(stats)
    }

    /// One file: comment-strip into the persisted intermediate, then split.
    /// An existing intermediate is reused rather than regenerated.
    fn process_file(
        &self,
        repo_name: &str,
        repo_root: &Path,
        preprocessed_dir: &Path,
        relative: &Path,
    ) -> Result<FileOutcome> {
        let file_path = repo_root.join(relative);
        let file_name = relative.file_name().ok_or_else(|| {
            PipelineError::InvalidPath(format!("Path has no file name: {}", relative.display()))
        })?;
        let preprocessed_path = preprocessed_dir.join(file_name);

        let stripped = if preprocessed_path.exists() {
            std::fs::read_to_string(&preprocessed_path)?
        } else {
            // Arbitrary real-world input: tolerate invalid UTF-8 instead of
            // failing the file.
            let raw = String::from_utf8_lossy(&std::fs::read(&file_path)?).into_owned();
            let stripped = strip_comments(self.language, &raw);
            std::fs::write(&preprocessed_path, &stripped)?;
            stripped
        };

        let lines = stripped.lines().count();
        let source = SourceFile::new(repo_name, relative.to_string_lossy(), stripped);
        let candidates = self.splitter.split_file(&source);

        Ok(FileOutcome { candidates, lines })
    }
}
