use crate::error::{PipelineError, Result};
use funcharvest_splitter::FunctionCandidate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SAMPLE_STORE_SCHEMA_VERSION: u32 = 1;

/// Tabular store of accepted function samples.
///
/// One row per function, keyed downstream by (repo, path). Rows are kept in
/// append order, which is scan order within a run.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    rows: Vec<FunctionCandidate>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSampleStore {
    schema_version: u32,
    rows: Vec<FunctionCandidate>,
}

impl SampleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let persisted: PersistedSampleStore = serde_json::from_slice(&bytes)?;
        if persisted.schema_version != SAMPLE_STORE_SCHEMA_VERSION {
            return Err(PipelineError::Other(format!(
                "Unsupported sample store schema_version {} (expected {SAMPLE_STORE_SCHEMA_VERSION})",
                persisted.schema_version
            )));
        }
        Ok(Self {
            rows: persisted.rows,
        })
    }

    /// Load an existing store, or start empty when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let persisted = PersistedSampleStore {
            schema_version: SAMPLE_STORE_SCHEMA_VERSION,
            rows: self.rows.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn append(&mut self, rows: impl IntoIterator<Item = FunctionCandidate>) {
        self.rows.extend(rows);
    }

    /// Whether any row of (repo, path) is already stored. A present file was
    /// fully harvested on an earlier run and is skipped on resume.
    #[must_use]
    pub fn contains_file(&self, repo: &str, path: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.repo == repo && row.path == path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[FunctionCandidate] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn row(repo: &str, path: &str, code: &str) -> FunctionCandidate {
        FunctionCandidate::new(repo, path, 1, 4, code)
    }

    #[test]
    fn roundtrip_preserves_rows_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("samples.json");

        let mut store = SampleStore::new();
        store.append([row("r", "a.js", "alpha"), row("r", "b.js", "beta")]);
        store.save(&path).unwrap();

        let loaded = SampleStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.rows()[0].code, "alpha");
        assert_eq!(loaded.rows()[1].code, "beta");
    }

    #[test]
    fn contains_file_matches_on_repo_and_path() {
        let mut store = SampleStore::new();
        store.append([row("r1", "a.js", "alpha")]);

        assert!(store.contains_file("r1", "a.js"));
        assert!(!store.contains_file("r2", "a.js"));
        assert!(!store.contains_file("r1", "b.js"));
    }

    #[test]
    fn load_or_default_starts_empty_for_missing_file() {
        let tmp = TempDir::new().unwrap();
        let store = SampleStore::load_or_default(tmp.path().join("missing.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_creates_parent_directories_and_leaves_no_tmp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("raw").join("samples.json");

        let mut store = SampleStore::new();
        store.append([row("r", "a.js", "alpha")]);
        store.save(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("samples.json");
        std::fs::write(&path, r#"{"schema_version": 99, "rows": []}"#).unwrap();

        assert!(SampleStore::load(&path).is_err());
    }
}
