use crate::error::Result;
use funcharvest_splitter::Language;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of fully harvested repositories, one name per line.
///
/// Lets an interrupted multi-repo run resume without rescanning repositories
/// it already finished.
pub struct FinishedLog {
    path: PathBuf,
}

impl FinishedLog {
    pub fn for_language(work_dir: impl AsRef<Path>, language: Language) -> Self {
        Self {
            path: work_dir
                .as_ref()
                .join(format!("finished_repos_{}.txt", language.as_str())),
        }
    }

    pub fn is_finished(&self, repo: &str) -> Result<bool> {
        if !self.path.is_file() {
            return Ok(false);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.lines().any(|line| line == repo))
    }

    pub fn mark_finished(&self, repo: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{repo}")?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_log_means_nothing_is_finished() {
        let temp = tempdir().unwrap();
        let log = FinishedLog::for_language(temp.path(), Language::Python);
        assert!(!log.is_finished("some-repo").unwrap());
    }

    #[test]
    fn marked_repos_are_reported_finished() {
        let temp = tempdir().unwrap();
        let log = FinishedLog::for_language(temp.path(), Language::JavaScript);

        log.mark_finished("repo-one").unwrap();
        log.mark_finished("repo-two").unwrap();

        assert!(log.is_finished("repo-one").unwrap());
        assert!(log.is_finished("repo-two").unwrap());
        assert!(!log.is_finished("repo-three").unwrap());
    }

    #[test]
    fn logs_are_split_per_language() {
        let temp = tempdir().unwrap();
        let py = FinishedLog::for_language(temp.path(), Language::Python);
        let js = FinishedLog::for_language(temp.path(), Language::JavaScript);

        py.mark_finished("shared-repo").unwrap();
        assert!(py.is_finished("shared-repo").unwrap());
        assert!(!js.is_finished("shared-repo").unwrap());
    }
}
