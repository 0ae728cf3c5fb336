//! Command engine
//!
//! A command is a single-use request run against the [`Model`]. It either
//! returns a [`CommandResult`] for display or fails with a [`CommandError`];
//! in both cases the model is left consistent, and on failure unchanged.
//!
//! # Contract
//! - `execute` takes `self` by value, so an instance runs at most once
//! - the model is passed as `&mut Model`: exclusive for the whole run and
//!   never absent
//! - errors from field validation and from the unique lists pass through
//!   untouched
//!
//! Commands that touch the model more than once go through
//! [`Model::atomically`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::field::ValidationError;
use super::model::Model;
use super::qanda::QAndA;
use super::unique_list::CollectionError;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod set;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use list::ListCommand;
pub use set::{AddToSetCommand, CreateSetCommand, DeleteSetCommand, RemoveFromSetCommand, ShowSetCommand};

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message for the user
    pub message: String,

    /// Entry the command acted on, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected: Option<QAndA>,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            affected: None,
        }
    }

    pub fn with_affected(mut self, qanda: QAndA) -> Self {
        self.affected = Some(qanda);
        self
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Reasons a command can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("The entry index provided is invalid: {index} (list has {size} entries)")]
    InvalidIndex { index: usize, size: usize },

    #[error("At least one field to edit must be provided")]
    NothingToEdit,
}

/// Position of an entry in the filtered view
///
/// Stored zero-based; users see one-based numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// `None` for 0, which is not a valid one-based position
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }

    /// The entry at this position of the model's filtered view
    pub fn resolve(self, model: &Model) -> Result<QAndA, CommandError> {
        let view = model.filtered_qandas();
        view.get(self.0).cloned().ok_or(CommandError::InvalidIndex {
            index: self.one_based(),
            size: view.len(),
        })
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// "1 entry" / "3 entries"
pub(crate) fn entry_count(count: usize) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("{count} {noun}")
}

/// A single-use request against the model
pub trait Command: fmt::Debug {
    /// Word the command is invoked by
    const COMMAND_WORD: &'static str;

    /// Whether a successful run changes data that must be saved
    fn mutates(&self) -> bool {
        true
    }

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// Run `command` against `model`, logging the outcome
pub fn run<C: Command>(command: C, model: &mut Model) -> Result<CommandResult, CommandError> {
    let word = C::COMMAND_WORD;
    tracing::debug!(command = ?command, "executing");

    match command.execute(model) {
        Ok(result) => {
            info!(command = word, message = %result.message, "command succeeded");
            Ok(result)
        }
        Err(err) => {
            warn!(command = word, error = %err, "command failed");
            Err(err)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for command tests

    use crate::core::medmoriser::Medmoriser;
    use crate::core::model::Model;
    use crate::core::qanda::fixtures::*;

    /// A model holding the two fixture entries
    pub fn typical_model() -> Model {
        let mut medmoriser = Medmoriser::new();
        medmoriser.add_qanda(heart_rate()).unwrap();
        medmoriser.add_qanda(krebs()).unwrap();
        Model::new(medmoriser)
    }
}
