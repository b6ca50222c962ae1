//! File-backed progress storage.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use wordsearch_game::progress::ProgressStore;

/// Keeps each blob in `<dir>/<key>.json`.
///
/// Storage failures are logged and otherwise ignored: losing a save must not
/// end a game in progress.
#[derive(Debug, Clone)]
pub(crate) struct FileProgressStore {
    dir: PathBuf,
}

impl FileProgressStore {
    pub(crate) fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the platform data directory, or `./save_data` if there is none.
    pub(crate) fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "wordsearch")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn write(&self, key: &str, blob: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.blob_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, blob)?;
        fs::rename(&temp_path, &path)?;
        Ok(path)
    }
}

impl ProgressStore for FileProgressStore {
    fn save(&mut self, key: &str, blob: String) {
        match self.write(key, &blob) {
            Ok(path) => log::debug!("saved {key} to {}", path.display()),
            Err(e) => log::warn!("failed to save {key} under {}: {e}", self.dir.display()),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Some(blob),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.blob_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("failed to remove {}: {e}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wordsearch_game::progress::{self, HIGH_SCORES_KEY, ProgressSnapshot};

    use super::*;

    fn setup() -> (TempDir, FileProgressStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(temp_dir.path().join("saves"));
        (temp_dir, store)
    }

    #[test]
    fn test_save_load_remove() {
        let (_temp, mut store) = setup();
        assert_eq!(store.load("missing"), None);

        store.save("blob", "{}".to_owned());
        assert_eq!(store.load("blob").as_deref(), Some("{}"));
        store.save("blob", "[]".to_owned());
        assert_eq!(store.load("blob").as_deref(), Some("[]"));

        store.remove("blob");
        assert_eq!(store.load("blob"), None);
        store.remove("blob");
    }

    #[test]
    fn test_progress_survives_reopen() {
        let (temp, mut store) = setup();
        let snapshot = ProgressSnapshot {
            level: 2,
            score: 130,
            found_words: vec!["IDEA".to_owned()],
            ..ProgressSnapshot::default()
        };
        progress::save_progress(&mut store, &snapshot).unwrap();
        assert!(progress::record_high_score(&mut store, 2, 130).unwrap());

        let reopened = FileProgressStore::new(temp.path().join("saves"));
        assert_eq!(progress::load_progress(&reopened), Some(snapshot));
        assert_eq!(progress::load_high_scores(&reopened).best(2), Some(130));
        assert!(temp.path().join("saves").join(format!("{HIGH_SCORES_KEY}.json")).exists());
    }
}
