//! Shows every entry, or only those carrying some tags

use crate::core::model::Model;
use crate::core::predicate::TagsPredicate;

use super::find::listed_message;
use super::{Command, CommandError, CommandResult};

pub const MESSAGE_SUCCESS: &str = "Listed all entries";

#[derive(Debug, Clone, Default)]
pub struct ListCommand {
    tags: Option<TagsPredicate>,
}

impl ListCommand {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn tagged(tags: TagsPredicate) -> Self {
        Self { tags: Some(tags) }
    }
}

impl Command for ListCommand {
    const COMMAND_WORD: &'static str = "list";

    fn mutates(&self) -> bool {
        false
    }

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self.tags {
            None => {
                model.reset_filter();
                Ok(CommandResult::new(MESSAGE_SUCCESS))
            }
            Some(tags) => {
                model.update_filtered_list(tags.into_predicate());
                Ok(CommandResult::new(listed_message(model.filtered_qandas().len())))
            }
        }
    }
}
