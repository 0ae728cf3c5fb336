//! QuestionSet - a named question bank
//!
//! Groups entries under one name. A set owns copies of its members; the
//! [`Medmoriser`](super::medmoriser::Medmoriser) root keeps them in step with
//! the main list and makes sure no entry belongs to two sets.

use serde::{Deserialize, Serialize};

use super::field::SetName;
use super::qanda::QAndA;
use super::unique_list::{CollectionError, Identity, UniqueList};

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    name: SetName,

    #[serde(default = "empty_members")]
    members: UniqueList<QAndA>,
}

fn empty_members() -> UniqueList<QAndA> {
    UniqueList::new("entry")
}

impl QuestionSet {
    pub fn new(name: SetName) -> Self {
        Self {
            name,
            members: empty_members(),
        }
    }

    pub fn name(&self) -> &SetName {
        &self.name
    }

    pub fn members(&self) -> &UniqueList<QAndA> {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a member shares an identity with `qanda`
    pub fn contains_member(&self, qanda: &QAndA) -> bool {
        self.members.contains(qanda)
    }

    /// Whether `qanda` (full equality) is a member
    pub fn holds(&self, qanda: &QAndA) -> bool {
        self.members.position(qanda).is_some()
    }

    pub fn add_member(&mut self, qanda: QAndA) -> Result<(), CollectionError> {
        self.members.add(qanda)
    }

    pub fn remove_member(&mut self, qanda: &QAndA) -> Result<QAndA, CollectionError> {
        self.members.remove(qanda)
    }

    pub fn replace_member(
        &mut self,
        target: &QAndA,
        replacement: QAndA,
    ) -> Result<QAndA, CollectionError> {
        self.members.replace(target, replacement)
    }
}

impl Identity for QuestionSet {
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}
