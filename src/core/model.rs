//! Model - live store with a filtered view
//!
//! Wraps the [`Medmoriser`] root and keeps a materialised, order-preserving
//! projection of its entries under the active [`Filter`].
//!
//! # Key Points
//! - Every mutating method recomputes the view before it returns, so readers
//!   never see the view and the bank disagree
//! - `set_medmoriser` swaps the whole bank and keeps the active filter
//! - `atomically` snapshots bank and filter, restoring both on error
//! - a question-set filter holds the set's name and is evaluated against
//!   the live set, so membership changes show up in the view

use std::fmt;

use tracing::{debug, instrument};

use super::field::SetName;
use super::medmoriser::Medmoriser;
use super::predicate::{show_all, Predicate};
use super::qanda::QAndA;
use super::question_set::QuestionSet;
use super::unique_list::CollectionError;

/// What the filtered view admits
#[derive(Clone)]
pub enum Filter {
    /// Entries passing an arbitrary predicate
    Predicate(Predicate),
    /// Current members of the named question set
    InSet(SetName),
}

impl Filter {
    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Filter::Predicate(predicate) => Some(predicate),
            Filter::InSet(_) => None,
        }
    }

    fn select(&self, medmoriser: &Medmoriser) -> Vec<QAndA> {
        let qandas = medmoriser.qandas().iter();
        match self {
            Filter::Predicate(predicate) => {
                qandas.filter(|qanda| predicate(*qanda)).cloned().collect()
            }
            // a deleted set admits nothing
            Filter::InSet(name) => match medmoriser.question_set(name) {
                Some(set) => qandas.filter(|qanda| set.holds(qanda)).cloned().collect(),
                None => Vec::new(),
            },
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
            Filter::InSet(name) => f.debug_tuple("InSet").field(name).finish(),
        }
    }
}

/// The in-memory store commands run against
pub struct Model {
    medmoriser: Medmoriser,
    filter: Filter,
    filtered: Vec<QAndA>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Medmoriser::new())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("medmoriser", &self.medmoriser)
            .field("filter", &self.filter)
            .field("filtered", &self.filtered)
            .finish()
    }
}

impl Model {
    pub fn new(medmoriser: Medmoriser) -> Self {
        let mut model = Self {
            medmoriser,
            filter: Filter::Predicate(show_all()),
            filtered: Vec::new(),
        };
        model.refresh();
        model
    }

    pub fn medmoriser(&self) -> &Medmoriser {
        &self.medmoriser
    }

    /// Swap in a whole new bank; the active filter is kept
    pub fn set_medmoriser(&mut self, medmoriser: Medmoriser) {
        debug!(entries = medmoriser.qandas().len(), "replacing medmoriser");
        self.medmoriser.reset_data(medmoriser);
        self.refresh();
    }

    // === Entries ===

    pub fn has_qanda(&self, qanda: &QAndA) -> bool {
        self.medmoriser.has_qanda(qanda)
    }

    pub fn add_qanda(&mut self, qanda: QAndA) -> Result<(), CollectionError> {
        let result = self.medmoriser.add_qanda(qanda);
        self.refresh();
        result
    }

    pub fn delete_qanda(&mut self, target: &QAndA) -> Result<QAndA, CollectionError> {
        let result = self.medmoriser.remove_qanda(target);
        self.refresh();
        result
    }

    pub fn set_qanda(&mut self, target: &QAndA, edited: QAndA) -> Result<QAndA, CollectionError> {
        let result = self.medmoriser.set_qanda(target, edited);
        self.refresh();
        result
    }

    // === Question sets ===

    pub fn question_set(&self, name: &SetName) -> Option<&QuestionSet> {
        self.medmoriser.question_set(name)
    }

    pub fn add_question_set(&mut self, set: QuestionSet) -> Result<(), CollectionError> {
        let result = self.medmoriser.add_question_set(set);
        self.refresh();
        result
    }

    pub fn delete_question_set(&mut self, name: &SetName) -> Result<QuestionSet, CollectionError> {
        let result = self.medmoriser.remove_question_set(name);
        self.refresh();
        result
    }

    pub fn add_to_question_set(
        &mut self,
        name: &SetName,
        qanda: QAndA,
    ) -> Result<(), CollectionError> {
        let result = self.medmoriser.add_to_question_set(name, qanda);
        self.refresh();
        result
    }

    pub fn remove_from_question_set(
        &mut self,
        name: &SetName,
        qanda: &QAndA,
    ) -> Result<QAndA, CollectionError> {
        let result = self.medmoriser.remove_from_question_set(name, qanda);
        self.refresh();
        result
    }

    // === Filtered view ===

    /// Entries admitted by the active filter, in bank order
    pub fn filtered_qandas(&self) -> &[QAndA] {
        &self.filtered
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Install a new predicate and re-evaluate the view immediately
    pub fn update_filtered_list(&mut self, predicate: Predicate) {
        self.filter = Filter::Predicate(predicate);
        self.refresh();
    }

    /// Narrow the view to the members of the named set, tracking later
    /// changes to that set; returns how many entries are shown
    pub fn show_question_set(&mut self, name: &SetName) -> Result<usize, CollectionError> {
        let set = self
            .medmoriser
            .question_set(name)
            .ok_or(CollectionError::NotFound { kind: "question set" })?;
        self.filter = Filter::InSet(set.name().clone());
        self.refresh();
        Ok(self.filtered.len())
    }

    /// Go back to showing every entry
    pub fn reset_filter(&mut self) {
        self.update_filtered_list(show_all());
    }

    /// Run `f`, restoring bank and filter if it fails
    ///
    /// For operations made of several mutations that must land together.
    #[instrument(level = "debug", skip_all)]
    pub fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Model) -> Result<T, E>,
    {
        let snapshot = (self.medmoriser.clone(), self.filter.clone());
        let result = f(self);
        if result.is_err() {
            debug!("rolling back model");
            let (medmoriser, filter) = snapshot;
            self.medmoriser = medmoriser;
            self.filter = filter;
            self.refresh();
        }
        result
    }

    fn refresh(&mut self) {
        self.filtered = self.filter.select(&self.medmoriser);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::field::parse_tags;
    use crate::core::predicate::TagsPredicate;
    use crate::core::qanda::fixtures::*;

    fn five_entries() -> Vec<QAndA> {
        vec![
            simple("Q1", "A1", &["urgent"]),
            simple("Q2", "A2", &[]),
            simple("Q3", "A3", &["exam"]),
            simple("Q4", "A4", &["urgent", "exam"]),
            simple("Q5", "A5", &[]),
        ]
    }

    fn model_with(entries: Vec<QAndA>) -> Model {
        let mut model = Model::default();
        for entry in entries {
            model.add_qanda(entry).unwrap();
        }
        model
    }

    fn urgent() -> Predicate {
        TagsPredicate::new(parse_tags(["urgent"]).unwrap()).into_predicate()
    }

    #[test]
    fn test_default_view_shows_everything() {
        let model = model_with(five_entries());
        assert_eq!(model.filtered_qandas(), five_entries().as_slice());
    }

    #[test]
    fn test_tag_filter_keeps_insertion_order() {
        let mut model = model_with(five_entries());
        model.update_filtered_list(urgent());

        let questions: Vec<&str> = model
            .filtered_qandas()
            .iter()
            .map(|q| q.question().as_str())
            .collect();
        assert_eq!(questions, vec!["Q1", "Q4"]);
    }

    #[test]
    fn test_view_follows_mutations() {
        let mut model = model_with(five_entries());
        model.update_filtered_list(urgent());

        model.add_qanda(simple("Q6", "A6", &["urgent"])).unwrap();
        assert_eq!(model.filtered_qandas().len(), 3);

        model.delete_qanda(&simple("Q1", "A1", &["urgent"])).unwrap();
        assert_eq!(model.filtered_qandas().len(), 2);

        let untagged = simple("Q4", "A4", &[]);
        model
            .set_qanda(&simple("Q4", "A4", &["urgent", "exam"]), untagged)
            .unwrap();
        let questions: Vec<&str> = model
            .filtered_qandas()
            .iter()
            .map(|q| q.question().as_str())
            .collect();
        assert_eq!(questions, vec!["Q6"]);
    }

    #[test]
    fn test_view_matches_predicate_subset() {
        let mut model = model_with(five_entries());
        let predicate = urgent();
        model.update_filtered_list(Arc::clone(&predicate));

        let expected: Vec<QAndA> = model
            .medmoriser()
            .qandas()
            .iter()
            .filter(|q| predicate(*q))
            .cloned()
            .collect();
        assert_eq!(model.filtered_qandas(), expected.as_slice());
    }

    #[test]
    fn test_set_medmoriser_keeps_filter() {
        let mut model = model_with(five_entries());
        let predicate = urgent();
        model.update_filtered_list(Arc::clone(&predicate));

        let mut replacement = Medmoriser::new();
        replacement.add_qanda(simple("New", "Entry", &[])).unwrap();
        replacement.add_qanda(simple("Hot", "Entry", &["urgent"])).unwrap();
        model.set_medmoriser(replacement);

        assert!(Arc::ptr_eq(model.filter().as_predicate().unwrap(), &predicate));
        assert_eq!(model.filtered_qandas().len(), 1);
        assert_eq!(model.medmoriser().qandas().len(), 2);
    }

    #[test]
    fn test_reset_filter() {
        let mut model = model_with(five_entries());
        model.update_filtered_list(urgent());
        model.reset_filter();
        assert_eq!(model.filtered_qandas().len(), 5);
    }

    #[test]
    fn test_failed_add_leaves_view_unchanged() {
        let mut model = model_with(five_entries());
        let before = model.filtered_qandas().to_vec();

        assert!(model.add_qanda(simple("Q1", "Other", &[])).is_err());
        assert_eq!(model.filtered_qandas(), before.as_slice());
    }

    #[test]
    fn test_atomically_rolls_back() {
        let mut model = model_with(five_entries());
        let predicate = urgent();
        model.update_filtered_list(Arc::clone(&predicate));
        let before = model.medmoriser().clone();

        let result: Result<(), CollectionError> = model.atomically(|m| {
            m.add_qanda(simple("Q6", "A6", &["urgent"]))?;
            m.reset_filter();
            m.add_qanda(simple("Q1", "dup", &[]))
        });

        assert!(result.is_err());
        assert_eq!(model.medmoriser(), &before);
        assert!(Arc::ptr_eq(model.filter().as_predicate().unwrap(), &predicate));
        assert_eq!(model.filtered_qandas().len(), 2);
    }

    #[test]
    fn test_atomically_commits_on_success() {
        let mut model = Model::default();
        let result: Result<(), CollectionError> = model.atomically(|m| {
            m.add_qanda(simple("Q1", "A1", &[]))?;
            m.add_qanda(simple("Q2", "A2", &[]))
        });

        assert!(result.is_ok());
        assert_eq!(model.filtered_qandas().len(), 2);
    }

    fn cardio() -> SetName {
        SetName::new("Cardiology").unwrap()
    }

    fn model_with_set(members: &[QAndA]) -> Model {
        let mut model = model_with(five_entries());
        model.add_question_set(QuestionSet::new(cardio())).unwrap();
        for member in members {
            model.add_to_question_set(&cardio(), member.clone()).unwrap();
        }
        model
    }

    #[test]
    fn test_set_view_follows_membership() {
        let first = simple("Q1", "A1", &["urgent"]);
        let second = simple("Q2", "A2", &[]);
        let mut model = model_with_set(&[first.clone(), second.clone()]);

        assert_eq!(model.show_question_set(&cardio()).unwrap(), 2);

        model.remove_from_question_set(&cardio(), &first).unwrap();
        assert_eq!(model.filtered_qandas(), &[second.clone()]);

        let third = simple("Q3", "A3", &["exam"]);
        model.add_to_question_set(&cardio(), third.clone()).unwrap();
        assert_eq!(model.filtered_qandas(), &[second, third]);
    }

    #[test]
    fn test_set_view_empty_after_set_deleted() {
        let mut model = model_with_set(&[simple("Q1", "A1", &["urgent"])]);
        model.show_question_set(&cardio()).unwrap();

        model.delete_question_set(&cardio()).unwrap();
        assert!(model.filtered_qandas().is_empty());
        assert_eq!(model.medmoriser().qandas().len(), 5);
    }

    #[test]
    fn test_show_missing_set_keeps_filter() {
        let mut model = model_with(five_entries());
        let err = model.show_question_set(&cardio()).unwrap_err();
        assert_eq!(err, CollectionError::NotFound { kind: "question set" });
        assert_eq!(model.filtered_qandas().len(), 5);
    }
}
