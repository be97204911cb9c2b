use funcharvest_splitter::Language;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Scanner for finding harvestable source files in one repository
pub struct RepoScanner {
    root: PathBuf,
    language: Language,
}

impl RepoScanner {
    pub fn new(root: impl AsRef<Path>, language: Language) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            language,
        }
    }

    /// Scan the repository for source files of the active language
    /// (.gitignore aware). Returned paths are relative to the repository
    /// root, sorted for a stable scan order.
    pub fn scan(&self) -> Vec<PathBuf> {
        let walk_root = match self.walk_root() {
            Some(root) => root,
            None => return Vec::new(),
        };

        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&walk_root);
        builder
            .hidden(true) // do not harvest hidden files
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if Language::from_path(path) != Some(self.language) {
                        continue;
                    }

                    if let Ok(meta) = entry.metadata() {
                        if meta.len() > MAX_FILE_SIZE_BYTES {
                            log::debug!(
                                "Skipping large file {} ({} bytes > {})",
                                path.display(),
                                meta.len(),
                                MAX_FILE_SIZE_BYTES
                            );
                            continue;
                        }
                    }

                    let Ok(relative) = path.strip_prefix(&self.root) else {
                        continue;
                    };
                    if Self::is_unwanted_file(relative) {
                        log::debug!("Skipping unwanted file {}", relative.display());
                        continue;
                    }

                    files.push(relative.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!(
            "Found {} {} files in {}",
            files.len(),
            self.language.as_str(),
            self.root.display()
        );
        files
    }

    /// JavaScript repositories are harvested only under `src/`; everything
    /// outside is overwhelmingly bundled or vendored code.
    fn walk_root(&self) -> Option<PathBuf> {
        match self.language {
            Language::JavaScript => {
                let src = self.root.join("src");
                if src.is_dir() {
                    Some(src)
                } else {
                    log::debug!("{}: no src/ directory, nothing to harvest", self.root.display());
                    None
                }
            }
            Language::Python | Language::Java => Some(self.root.clone()),
        }
    }

    /// Fragment match against the repo-relative path: tests, type stubs,
    /// config files, and minified bundles are never harvested.
    fn is_unwanted_file(relative: &Path) -> bool {
        let path_str = relative.to_string_lossy();
        UNWANTED_FRAGMENTS
            .iter()
            .any(|fragment| path_str.contains(fragment))
    }
}

const UNWANTED_FRAGMENTS: &[&str] = &["test", ".spec.", ".d.", ".config.", ".min."];
const MAX_FILE_SIZE_BYTES: u64 = 1_048_576; // 1 MB
