//! Question set commands

use crate::core::field::SetName;
use crate::core::model::Model;
use crate::core::question_set::QuestionSet;

use super::{entry_count, Command, CommandError, CommandResult, Index};

/// Creates an empty question set
#[derive(Debug, Clone)]
pub struct CreateSetCommand {
    name: SetName,
}

impl CreateSetCommand {
    pub fn new(name: SetName) -> Self {
        Self { name }
    }
}

impl Command for CreateSetCommand {
    const COMMAND_WORD: &'static str = "set create";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_question_set(QuestionSet::new(self.name.clone()))?;
        Ok(CommandResult::new(format!("New question set created: {}", self.name)))
    }
}

/// Deletes a question set; its entries stay in the bank
#[derive(Debug, Clone)]
pub struct DeleteSetCommand {
    name: SetName,
}

impl DeleteSetCommand {
    pub fn new(name: SetName) -> Self {
        Self { name }
    }
}

impl Command for DeleteSetCommand {
    const COMMAND_WORD: &'static str = "set delete";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let removed = model.delete_question_set(&self.name)?;
        Ok(CommandResult::new(format!(
            "Deleted question set: {} ({} kept in the bank)",
            removed.name(),
            entry_count(removed.len())
        )))
    }
}

/// Files a displayed entry under a question set
#[derive(Debug, Clone)]
pub struct AddToSetCommand {
    name: SetName,
    index: Index,
}

impl AddToSetCommand {
    pub fn new(name: SetName, index: Index) -> Self {
        Self { name, index }
    }
}

impl Command for AddToSetCommand {
    const COMMAND_WORD: &'static str = "set add";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(model)?;
        model.add_to_question_set(&self.name, target.clone())?;
        Ok(CommandResult::new(format!("Added to {}: {}", self.name, target)).with_affected(target))
    }
}

/// Takes a displayed entry out of a question set
#[derive(Debug, Clone)]
pub struct RemoveFromSetCommand {
    name: SetName,
    index: Index,
}

impl RemoveFromSetCommand {
    pub fn new(name: SetName, index: Index) -> Self {
        Self { name, index }
    }
}

impl Command for RemoveFromSetCommand {
    const COMMAND_WORD: &'static str = "set remove";

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(model)?;
        let removed = model.remove_from_question_set(&self.name, &target)?;
        Ok(CommandResult::new(format!("Removed from {}: {}", self.name, removed))
            .with_affected(removed))
    }
}

/// Narrows the displayed list to the members of one set
#[derive(Debug, Clone)]
pub struct ShowSetCommand {
    name: SetName,
}

impl ShowSetCommand {
    pub fn new(name: SetName) -> Self {
        Self { name }
    }
}

impl Command for ShowSetCommand {
    const COMMAND_WORD: &'static str = "set show";

    fn mutates(&self) -> bool {
        false
    }

    fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let count = model.show_question_set(&self.name)?;
        Ok(CommandResult::new(format!(
            "{} in question set {}",
            entry_count(count),
            self.name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::testing::typical_model;
    use crate::core::qanda::fixtures::*;
    use crate::core::unique_list::CollectionError;

    fn cardio() -> SetName {
        SetName::new("Cardiology").unwrap()
    }

    fn model_with_set() -> Model {
        let mut model = typical_model();
        CreateSetCommand::new(cardio()).execute(&mut model).unwrap();
        model
    }

    #[test]
    fn test_create_set() {
        let model = model_with_set();
        assert!(model.question_set(&cardio()).unwrap().is_empty());
    }

    #[test]
    fn test_create_duplicate_set_fails() {
        let mut model = model_with_set();
        let err = CreateSetCommand::new(SetName::new("cardiology").unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::Collection(CollectionError::Duplicate { kind: "question set" })
        );
    }

    #[test]
    fn test_add_and_remove_member() {
        let mut model = model_with_set();
        let result = AddToSetCommand::new(cardio(), Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.affected, Some(heart_rate()));
        assert!(model.question_set(&cardio()).unwrap().holds(&heart_rate()));

        RemoveFromSetCommand::new(cardio(), Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        assert!(model.question_set(&cardio()).unwrap().is_empty());
        assert_eq!(model.medmoriser().qandas().len(), 2);
    }

    #[test]
    fn test_remove_non_member_fails() {
        let mut model = model_with_set();
        let err = RemoveFromSetCommand::new(cardio(), Index::from_zero_based(1))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::Collection(CollectionError::NotFound { kind: "entry" })
        );
    }

    #[test]
    fn test_show_set_filters_view() {
        let mut model = model_with_set();
        AddToSetCommand::new(cardio(), Index::from_zero_based(1))
            .execute(&mut model)
            .unwrap();

        let result = ShowSetCommand::new(cardio()).execute(&mut model).unwrap();
        assert_eq!(result.message, "1 entry in question set Cardiology");
        assert_eq!(model.filtered_qandas(), &[krebs()]);
    }

    #[test]
    fn test_show_set_view_tracks_removal() {
        let mut model = model_with_set();
        for i in 0..2 {
            AddToSetCommand::new(cardio(), Index::from_zero_based(i))
                .execute(&mut model)
                .unwrap();
        }
        let result = ShowSetCommand::new(cardio()).execute(&mut model).unwrap();
        assert_eq!(result.message, "2 entries in question set Cardiology");

        RemoveFromSetCommand::new(cardio(), Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();

        let members = model.question_set(&cardio()).unwrap().len();
        assert_eq!(members, 1);
        assert_eq!(model.filtered_qandas(), &[krebs()]);
    }

    #[test]
    fn test_show_set_view_empties_when_set_deleted() {
        let mut model = model_with_set();
        AddToSetCommand::new(cardio(), Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        ShowSetCommand::new(cardio()).execute(&mut model).unwrap();

        DeleteSetCommand::new(cardio()).execute(&mut model).unwrap();
        assert!(model.filtered_qandas().is_empty());
    }

    #[test]
    fn test_show_missing_set() {
        let mut model = typical_model();
        let err = ShowSetCommand::new(cardio()).execute(&mut model).unwrap_err();
        assert_eq!(
            err,
            CommandError::Collection(CollectionError::NotFound { kind: "question set" })
        );
        assert_eq!(model.filtered_qandas().len(), 2);
    }

    #[test]
    fn test_delete_set_keeps_entries() {
        let mut model = model_with_set();
        AddToSetCommand::new(cardio(), Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();

        let result = DeleteSetCommand::new(cardio()).execute(&mut model).unwrap();
        assert!(result.message.contains("(1 entry kept in the bank)"));
        assert!(model.question_set(&cardio()).is_none());
        assert_eq!(model.medmoriser().qandas().len(), 2);
    }
}
