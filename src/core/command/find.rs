//! Narrows the displayed list to entries matching keywords

use crate::core::model::Model;
use crate::core::predicate::KeywordsPredicate;

use super::{entry_count, Command, CommandError, CommandResult};

#[derive(Debug, Clone)]
pub struct FindCommand {
    predicate: KeywordsPredicate,
}

impl FindCommand {
    pub fn new(predicate: KeywordsPredicate) -> Self {
        Self { predicate }
    }
}

/// "1 entry listed!" / "3 entries listed!"
pub(crate) fn listed_message(count: usize) -> String {
    format!("{} listed!", entry_count(count))
}

impl Command for FindCommand {
    const COMMAND_WORD: &'static str = "find";

    fn mutates(&self) -> bool {
        false
    }

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_list(self.predicate.into_predicate());
        Ok(CommandResult::new(listed_message(model.filtered_qandas().len())))
    }
}
