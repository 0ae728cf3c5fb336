//! Adds an entry, optionally straight into a question set

use crate::core::field::SetName;
use crate::core::model::Model;
use crate::core::qanda::QAndA;

use super::{Command, CommandError, CommandResult};

pub const MESSAGE_SUCCESS: &str = "New entry added";

#[derive(Debug, Clone)]
pub struct AddCommand {
    qanda: QAndA,
    set: Option<SetName>,
}

impl AddCommand {
    pub fn new(qanda: QAndA) -> Self {
        Self { qanda, set: None }
    }

    /// Also file the new entry under `set`, which must already exist
    pub fn into_set(mut self, set: SetName) -> Self {
        self.set = Some(set);
        self
    }
}

impl Command for AddCommand {
    const COMMAND_WORD: &'static str = "add";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let Self { qanda, set } = self;

        model.atomically(|model| {
            model.add_qanda(qanda.clone())?;
            if let Some(set) = &set {
                model.add_to_question_set(set, qanda.clone())?;
            }
            Ok::<_, CommandError>(())
        })?;

        let message = match &set {
            Some(set) => format!("{MESSAGE_SUCCESS} to {set}: {qanda}"),
            None => format!("{MESSAGE_SUCCESS}: {qanda}"),
        };
        Ok(CommandResult::new(message).with_affected(qanda))
    }
}
