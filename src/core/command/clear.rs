//! Wipes the whole question bank

use crate::core::medmoriser::Medmoriser;
use crate::core::model::Model;

use super::{Command, CommandError, CommandResult};

pub const MESSAGE_SUCCESS: &str = "Medmoriser has been cleared!";

/// Replaces the bank with a fresh, empty one
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    const COMMAND_WORD: &'static str = "clear";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.set_medmoriser(Medmoriser::new());
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
