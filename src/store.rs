//! Save file access.
//!
//! One process owns the file for the span of one invocation: it is read once
//! on start and written once before exit. Concurrent invocations racing on
//! the same file are not supported and no locking is attempted.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::common::GameError;
use crate::session::Session;

/// Location of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session. A missing file is the first run and yields
    /// `Ok(None)`; any other failure is an error.
    pub fn load(&self) -> Result<Option<Session>, GameError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no save file at {}, starting a new game", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let session = codec::decode(&blob)?;
        log::info!("loaded turn {} from {}", session.turn(), self.path.display());
        Ok(Some(session))
    }

    /// Load the saved session or start a new one with `fresh`.
    pub fn load_or_else(&self, fresh: impl FnOnce() -> Session) -> Result<Session, GameError> {
        Ok(self.load()?.unwrap_or_else(fresh))
    }

    /// Overwrite the save file with `session`.
    pub fn save(&self, session: &Session) -> Result<(), GameError> {
        fs::write(&self.path, codec::encode(session))?;
        log::info!("saved turn {} to {}", session.turn(), self.path.display());
        Ok(())
    }
}
