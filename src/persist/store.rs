//! Arena file store.
//!
//! Arenas live in one pretty-printed JSON array. The store is touched at
//! process start and stop only, never from session or builder operations.

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ErrorKind;
use crate::game::arena::ArenaError;
use crate::game::registry::RegistryError;
use super::record::ArenaRecord;

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File content is not valid arena JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed arena validation.
    #[error("Invalid arena {name}: {source}")]
    InvalidArena {
        /// Name in the record.
        name: String,
        /// Validation failure.
        #[source]
        source: ArenaError,
    },

    /// Records could not be registered, e.g. duplicate names.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl StoreError {
    /// Error class. A missing file maps to [`ErrorKind::NotFound`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Io(e) if e.kind() == io::ErrorKind::NotFound => ErrorKind::NotFound,
            StoreError::Io(_) => ErrorKind::State,
            StoreError::Json(_) | StoreError::InvalidArena { .. } => ErrorKind::Validation,
            StoreError::Registry(e) => e.kind(),
        }
    }
}

/// JSON file holding every committed arena.
#[derive(Clone, Debug)]
pub struct ArenaStore {
    path: PathBuf,
}

impl ArenaStore {
    /// Store backed by `path`. Nothing is read until [`ArenaStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<ArenaRecord>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No arena file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<ArenaRecord> = serde_json::from_str(&json)?;
        info!("Loaded {} arenas from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Replace the file with `records`.
    pub fn save(&self, records: &[ArenaRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json)?;
        info!("Saved {} arenas to {}", records.len(), self.path.display());
        Ok(())
    }
}
