//! MessagePack implementation of the snapshot repository.
//!
//! Structs are written with field names so the tagged enums in the state tree
//! (round phases, mini-game sessions) decode without relying on field order.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{Result, error::Error, ports::SnapshotRepository, state::AppState};

/// MessagePack-based snapshot repository.
///
/// # Examples
///
/// ```no_run
/// use mira_colors::adapters::MsgPackRepository;
/// use mira_colors::palette::PaletteId;
/// use mira_colors::ports::SnapshotRepository;
/// use mira_colors::progress::UserProgress;
/// use mira_colors::state::AppState;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let state = AppState::new(PaletteId::Warm, UserProgress::initial(), None, 2);
///
/// repo.save(&state, Path::new("progress.msgpack"))?;
/// let loaded = repo.load(Path::new("progress.msgpack"))?;
/// assert_eq!(loaded, state);
/// # Ok::<(), mira_colors::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotRepository for MsgPackRepository {
    fn save(&self, state: &AppState, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write_named(&mut writer, state).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize snapshot to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        std::io::Write::flush(&mut writer).map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;
        tracing::debug!(?path, "snapshot saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<AppState> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let state = rmp_serde::decode::from_read(&file).map_err(|e| {
            Error::SerializationContext {
                operation: "deserialize snapshot from MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(?path, "snapshot loaded");
        Ok(state)
    }
}
