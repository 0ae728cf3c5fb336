//! Edits an entry by building a replacement and substituting it

use crate::core::model::Model;
use crate::core::qanda::QAndAChanges;

use super::{Command, CommandError, CommandResult, Index};

pub const MESSAGE_SUCCESS: &str = "Edited entry";
pub const MESSAGE_UNCHANGED: &str = "Entry unchanged";

#[derive(Debug, Clone)]
pub struct EditCommand {
    index: Index,
    changes: QAndAChanges,
}

impl EditCommand {
    pub fn new(index: Index, changes: QAndAChanges) -> Self {
        Self { index, changes }
    }
}

impl Command for EditCommand {
    const COMMAND_WORD: &'static str = "edit";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !self.changes.is_any_field_set() {
            return Err(CommandError::NothingToEdit);
        }

        let target = self.index.resolve(model)?;
        let edited = target.with_changes(&self.changes);
        if edited == target {
            return Ok(CommandResult::new(format!("{MESSAGE_UNCHANGED}: {target}")));
        }

        // The edited entry may fall outside the active filter, so show
        // everything once it lands
        model.atomically(|model| {
            model.set_qanda(&target, edited.clone())?;
            model.reset_filter();
            Ok::<_, CommandError>(())
        })?;

        Ok(CommandResult::new(format!("{MESSAGE_SUCCESS}: {edited}")).with_affected(edited))
    }
}
