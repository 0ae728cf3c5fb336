//! Medmoriser - root aggregate of the question bank
//!
//! Holds every entry plus the question sets grouping them.
//!
//! # Invariants
//! - `qandas` has no two identity-equal entries
//! - `question_sets` has no two sets with the same name (ignoring case)
//! - every set member is also in `qandas` (full equality)
//! - no entry is a member of more than one set

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::field::SetName;
use super::qanda::QAndA;
use super::question_set::QuestionSet;
use super::unique_list::{CollectionError, UniqueList};

const ENTRY: &str = "entry";
const QUESTION_SET: &str = "question set";

/// The whole question bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MedmoriserData")]
pub struct Medmoriser {
    qandas: UniqueList<QAndA>,
    question_sets: UniqueList<QuestionSet>,
}

impl Default for Medmoriser {
    fn default() -> Self {
        Self::new()
    }
}

impl Medmoriser {
    pub fn new() -> Self {
        Self {
            qandas: UniqueList::new(ENTRY),
            question_sets: UniqueList::new(QUESTION_SET),
        }
    }

    pub fn qandas(&self) -> &UniqueList<QAndA> {
        &self.qandas
    }

    pub fn question_sets(&self) -> &UniqueList<QuestionSet> {
        &self.question_sets
    }

    pub fn is_empty(&self) -> bool {
        self.qandas.is_empty() && self.question_sets.is_empty()
    }

    /// Replace the whole content with `other`
    pub fn reset_data(&mut self, other: Medmoriser) {
        *self = other;
    }

    // === Entries ===

    /// Whether an identity-equal entry exists
    pub fn has_qanda(&self, qanda: &QAndA) -> bool {
        self.qandas.contains(qanda)
    }

    pub fn add_qanda(&mut self, qanda: QAndA) -> Result<(), CollectionError> {
        debug!(question = %qanda.question(), "adding entry");
        self.qandas.add(qanda)
    }

    /// Remove an entry from the bank and from the set owning it
    pub fn remove_qanda(&mut self, qanda: &QAndA) -> Result<QAndA, CollectionError> {
        let owner = self.owning_set(qanda).map(|set| {
            let mut updated = set.clone();
            // membership was checked by owning_set
            let _ = updated.remove_member(qanda);
            (set.clone(), updated)
        });

        let removed = self.qandas.remove(qanda)?;
        if let Some((original, updated)) = owner {
            self.question_sets.replace(&original, updated)?;
        }
        debug!(question = %removed.question(), "removed entry");
        Ok(removed)
    }

    /// Replace `target` with `edited` in the bank and in the set owning it
    pub fn set_qanda(&mut self, target: &QAndA, edited: QAndA) -> Result<QAndA, CollectionError> {
        let owner = match self.owning_set(target) {
            Some(set) => {
                let mut updated = set.clone();
                updated.replace_member(target, edited.clone())?;
                Some((set.clone(), updated))
            }
            None => None,
        };

        let previous = self.qandas.replace(target, edited)?;
        if let Some((original, updated)) = owner {
            self.question_sets.replace(&original, updated)?;
        }
        debug!(question = %previous.question(), "replaced entry");
        Ok(previous)
    }

    /// Replace every entry; set members no longer present are dropped
    pub fn set_qandas(&mut self, qandas: Vec<QAndA>) -> Result<(), CollectionError> {
        let new_list = UniqueList::from_vec(ENTRY, qandas)?;

        let pruned: Vec<QuestionSet> = self
            .question_sets
            .iter()
            .map(|set| {
                let mut kept = QuestionSet::new(set.name().clone());
                for member in set.members().iter().filter(|m| new_list.position(m).is_some()) {
                    // members of one set are already unique
                    let _ = kept.add_member(member.clone());
                }
                kept
            })
            .collect();

        self.question_sets.set_all(pruned)?;
        self.qandas = new_list;
        Ok(())
    }

    // === Question sets ===

    pub fn question_set(&self, name: &SetName) -> Option<&QuestionSet> {
        self.question_sets.iter().find(|set| set.name().eq_ignore_case(name))
    }

    /// The set holding `qanda` (full equality), if any
    pub fn owning_set(&self, qanda: &QAndA) -> Option<&QuestionSet> {
        self.question_sets.iter().find(|set| set.holds(qanda))
    }

    /// Add a set; its members must already be in the bank and in no other set
    pub fn add_question_set(&mut self, set: QuestionSet) -> Result<(), CollectionError> {
        self.check_members(&set)?;
        debug!(name = %set.name(), "adding question set");
        self.question_sets.add(set)
    }

    pub fn remove_question_set(&mut self, name: &SetName) -> Result<QuestionSet, CollectionError> {
        let target = self
            .question_set(name)
            .cloned()
            .ok_or(CollectionError::NotFound { kind: QUESTION_SET })?;
        debug!(name = %target.name(), "removing question set");
        self.question_sets.remove(&target)
    }

    /// Put a bank entry into the named set
    pub fn add_to_question_set(
        &mut self,
        name: &SetName,
        qanda: QAndA,
    ) -> Result<(), CollectionError> {
        let original = self
            .question_set(name)
            .cloned()
            .ok_or(CollectionError::NotFound { kind: QUESTION_SET })?;

        if self.qandas.position(&qanda).is_none() {
            return Err(CollectionError::NotFound { kind: ENTRY });
        }
        if self.question_sets.iter().any(|set| set.contains_member(&qanda)) {
            return Err(CollectionError::Duplicate { kind: ENTRY });
        }

        let mut updated = original.clone();
        updated.add_member(qanda)?;
        self.question_sets.replace(&original, updated)?;
        Ok(())
    }

    /// Take an entry out of the named set; the entry stays in the bank
    pub fn remove_from_question_set(
        &mut self,
        name: &SetName,
        qanda: &QAndA,
    ) -> Result<QAndA, CollectionError> {
        let original = self
            .question_set(name)
            .cloned()
            .ok_or(CollectionError::NotFound { kind: QUESTION_SET })?;

        let mut updated = original.clone();
        let removed = updated.remove_member(qanda)?;
        self.question_sets.replace(&original, updated)?;
        Ok(removed)
    }

    /// Members of `set` must be bank entries not held by any other set
    fn check_members(&self, set: &QuestionSet) -> Result<(), CollectionError> {
        for member in set.members() {
            if self.qandas.position(member).is_none() {
                return Err(CollectionError::NotFound { kind: ENTRY });
            }
            let taken = self
                .question_sets
                .iter()
                .any(|other| other.contains_member(member));
            if taken {
                return Err(CollectionError::Duplicate { kind: ENTRY });
            }
        }
        Ok(())
    }
}

/// Serialized form, validated on the way in
#[derive(Deserialize)]
struct MedmoriserData {
    #[serde(default)]
    qandas: Vec<QAndA>,
    #[serde(default)]
    question_sets: Vec<QuestionSet>,
}

impl TryFrom<MedmoriserData> for Medmoriser {
    type Error = CollectionError;

    fn try_from(data: MedmoriserData) -> Result<Self, Self::Error> {
        let mut medmoriser = Medmoriser {
            qandas: UniqueList::from_vec(ENTRY, data.qandas)?,
            question_sets: UniqueList::new(QUESTION_SET),
        };
        for set in data.question_sets {
            medmoriser.add_question_set(set)?;
        }
        Ok(medmoriser)
    }
}
