//! Storage - persistence of the question bank
//!
//! The core never calls into this module. The CLI loads the bank at startup
//! and saves it after each successful command that changed it.

use std::path::Path;

use thiserror::Error;

use crate::core::medmoriser::Medmoriser;

pub mod json;

pub use json::JsonMedmoriserStorage;

/// Errors from reading or writing a data file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not access data file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file {path} is not in the correct format: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save interface for a question bank
pub trait MedmoriserStorage {
    /// Location of the data
    fn path(&self) -> &Path;

    /// Read the bank; `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<Medmoriser>, StorageError>;

    /// Write the whole bank
    fn save(&self, medmoriser: &Medmoriser) -> Result<(), StorageError>;
}
