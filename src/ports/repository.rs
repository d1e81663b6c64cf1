//! Repository port for snapshot persistence.

use std::path::Path;

use crate::{Result, state::AppState};

/// Port for persisting and loading application snapshots.
///
/// The snapshot is the whole state tree: settings, avatar, palette progress
/// and any in-flight round or mini-game session. Implementations must keep
/// set and map semantics intact (completed challenges stay a set, stars stay
/// keyed by color).
///
/// # Examples
///
/// ```no_run
/// use mira_colors::ports::SnapshotRepository;
/// use mira_colors::state::AppState;
/// use std::path::Path;
///
/// fn save_snapshot<R: SnapshotRepository>(
///     repo: &R,
///     state: &AppState,
///     path: &Path,
/// ) -> mira_colors::Result<()> {
///     repo.save(state, path)
/// }
/// ```
pub trait SnapshotRepository {
    /// Save a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save(&self, state: &AppState, path: &Path) -> Result<()>;

    /// Load a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is stored at `path` or the stored bytes do
    /// not decode into a snapshot.
    fn load(&self, path: &Path) -> Result<AppState>;
}
