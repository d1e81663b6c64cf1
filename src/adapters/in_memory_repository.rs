//! In-memory snapshot repository for testing.
//!
//! Snapshots are encoded exactly as [`MsgPackRepository`](super::MsgPackRepository)
//! writes them, so tests exercise the same serialization without touching
//! the file system.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, error::Error, ports::SnapshotRepository, state::AppState};

/// In-memory repository keyed by path.
///
/// # Examples
///
/// ```
/// use mira_colors::adapters::InMemoryRepository;
/// use mira_colors::palette::PaletteId;
/// use mira_colors::ports::SnapshotRepository;
/// use mira_colors::progress::UserProgress;
/// use mira_colors::state::AppState;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let state = AppState::new(PaletteId::Warm, UserProgress::initial(), None, 2);
///
/// repo.save(&state, Path::new("slot-1"))?;
/// assert_eq!(repo.load(Path::new("slot-1"))?, state);
/// # Ok::<(), mira_colors::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl SnapshotRepository for InMemoryRepository {
    fn save(&self, state: &AppState, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec_named(state).map_err(|e| Error::SerializationContext {
            operation: "serialize snapshot for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<AppState> {
        let storage = self.storage();
        let bytes = storage.get(&key(path)).ok_or_else(|| Error::Io {
            operation: format!("load snapshot from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize snapshot from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{palette::PaletteId, progress::UserProgress, state::Settings};

    fn state() -> AppState {
        AppState::new(PaletteId::Warm, UserProgress::initial(), None, 2)
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let path = Path::new("slot");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        let mut state = state();
        state.settings = Settings {
            colorblind_mode: true,
            ..Settings::default()
        };
        repo.save(&state, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded = repo.load(path).unwrap();
        assert_eq!(loaded, state);
        assert!(loaded.settings.colorblind_mode);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).is_err());
    }

    #[test]
    fn test_save_overwrites_and_clear_removes_all() {
        let repo = InMemoryRepository::new();
        repo.save(&state(), Path::new("a")).unwrap();
        repo.save(&state(), Path::new("a")).unwrap();
        repo.save(&state(), Path::new("b")).unwrap();
        assert_eq!(repo.count(), 2);

        repo.clear();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();
        let path = Path::new("shared");

        repo1.save(&state(), path).unwrap();
        assert_eq!(repo2.load(path).unwrap(), state());
        assert_eq!(repo2.count(), 1);
    }
}
