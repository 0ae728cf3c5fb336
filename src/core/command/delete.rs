//! Deletes an entry by its position in the displayed list

use crate::core::model::Model;

use super::{Command, CommandError, CommandResult, Index};

pub const MESSAGE_SUCCESS: &str = "Deleted entry";

#[derive(Debug, Clone, Copy)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    const COMMAND_WORD: &'static str = "delete";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(model)?;
        let removed = model.delete_qanda(&target)?;

        Ok(CommandResult::new(format!("{MESSAGE_SUCCESS}: {removed}")).with_affected(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::testing::typical_model;
    use crate::core::qanda::fixtures::*;
    use crate::core::qanda::QAndA;

    #[test]
    fn test_delete_valid_index() {
        let mut model = typical_model();
        let result = DeleteCommand::new(Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.affected, Some(heart_rate()));
        assert_eq!(model.filtered_qandas(), &[krebs()]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut model = typical_model();
        let before = model.medmoriser().clone();

        let err = DeleteCommand::new(Index::from_zero_based(5))
            .execute(&mut model)
            .unwrap_err();

        assert_eq!(err, CommandError::InvalidIndex { index: 6, size: 2 });
        assert_eq!(model.medmoriser(), &before);
    }

    #[test]
    fn test_delete_indexes_filtered_view() {
        let mut model = typical_model();
        model.update_filtered_list(std::sync::Arc::new(|q: &QAndA| *q == krebs()));

        DeleteCommand::new(Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();

        assert_eq!(model.medmoriser().qandas().as_slice(), &[heart_rate()]);
        assert!(model.filtered_qandas().is_empty());
    }
}
