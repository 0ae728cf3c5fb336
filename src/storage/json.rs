//! JSON file backend
//!
//! The whole bank is one pretty-printed JSON document:
//!
//! ```json
//! {
//!   "qandas": [
//!     { "question": "...", "phone": "...", "email": "...", "answer": "...", "tags": ["..."] }
//!   ],
//!   "question_sets": [
//!     { "name": "...", "members": [ ... ] }
//!   ]
//! }
//! ```
//!
//! Field validation and duplicate checks run while deserializing, so a
//! hand-edited file with bad data is rejected as a whole.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::{MedmoriserStorage, StorageError};
use crate::core::medmoriser::Medmoriser;

/// Stores the bank in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonMedmoriserStorage {
    path: PathBuf,
}

impl JsonMedmoriserStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Format {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl MedmoriserStorage for JsonMedmoriserStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Medmoriser>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("data file not found");
                return Ok(None);
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let medmoriser: Medmoriser =
            serde_json::from_str(&content).map_err(|e| self.format_error(e))?;
        debug!(entries = medmoriser.qandas().len(), "loaded data file");
        Ok(Some(medmoriser))
    }

    #[instrument(skip(self, medmoriser), fields(path = %self.path.display()))]
    fn save(&self, medmoriser: &Medmoriser) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(medmoriser).map_err(|e| self.format_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(entries = medmoriser.qandas().len(), "saved data file");
        Ok(())
    }
}
