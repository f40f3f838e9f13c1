use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const APP_DIR_NAME: &str = "torus-snake";
const SCORE_FILE_NAME: &str = "best.json";

/// Failure while writing the best score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("cannot write best score to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode best score: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the single best-score value.
pub trait BestScoreStore {
    /// Returns the stored best score, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    fn save(&mut self, best: u32) -> Result<(), ScoreError>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for &mut S {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<(), ScoreError> {
        (**self).save(best)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ScoreFile {
    best: u32,
}

/// Accepts the current record layout as well as a bare integer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredBest {
    Record { best: u32 },
    Bare(u32),
}

impl From<StoredBest> for u32 {
    fn from(stored: StoredBest) -> Self {
        match stored {
            StoredBest::Record { best } | StoredBest::Bare(best) => best,
        }
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Best score kept as JSON in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at [`scores_path`].
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        load_best_from_path(&self.path)
    }

    fn save(&mut self, best: u32) -> Result<(), ScoreError> {
        save_best_to_path(&self.path, best)
    }
}

fn load_best_from_path(path: &Path) -> u32 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no best score stored yet");
            return 0;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read best score, using 0");
            return 0;
        }
    };

    match serde_json::from_str::<StoredBest>(raw.trim()) {
        Ok(stored) => stored.into(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed best score, using 0");
            0
        }
    }
}

fn save_best_to_path(path: &Path, best: u32) -> Result<(), ScoreError> {
    let io_error = |source| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(&ScoreFile { best })?;
    fs::write(path, json).map_err(io_error)?;
    debug!(path = %path.display(), best, "best score saved");
    Ok(())
}

/// In-process store that counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: Option<u32>,
    writes: usize,
}

impl MemoryStore {
    /// Store pre-seeded with a best score.
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn stored(&self) -> Option<u32> {
        self.best
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save(&mut self, best: u32) -> Result<(), ScoreError> {
        self.best = Some(best);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{BestScoreStore, MemoryStore, load_best_from_path, save_best_to_path};

    #[test]
    fn saved_best_loads_back() {
        let path = unique_test_path("saved");

        save_best_to_path(&path, 42).expect("score save should succeed");
        assert_eq!(load_best_from_path(&path), 42);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        assert_eq!(load_best_from_path(&path), 0);
    }

    #[test]
    fn bare_integer_is_accepted() {
        let path = unique_test_path("bare");
        write_fixture(&path, "7\n");

        assert_eq!(load_best_from_path(&path), 7);

        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_score_file_returns_zero() {
        for (label, content) in [
            ("garbage", "not-json"),
            ("negative", "-3"),
            ("wrong_key", "{\"high\": 4}"),
        ] {
            let path = unique_test_path(label);
            write_fixture(&path, content);

            assert_eq!(load_best_from_path(&path), 0, "fixture {label}");

            cleanup_test_path(&path);
        }
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);

        store.save(3).expect("memory store never fails");

        assert_eq!(store.load(), 3);
        assert_eq!(store.writes(), 1);
    }

    fn write_fixture(path: &PathBuf, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, content).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("torus-snake-score-tests")
            .join(format!("{label}-{nanos}"))
            .join("best.json")
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
