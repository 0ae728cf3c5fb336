//! QAndA - Core data structure
//!
//! A question/answer flashcard, the fundamental unit of the question bank.
//!
//! # Key Properties
//! - **question**, **phone**, **email**: identity fields
//! - **answer**, **tags**: data fields
//! - Immutable: editing builds a replacement via [`QAndA::with_changes`]
//!
//! # Equality
//! Two notions exist side by side:
//! - [`QAndA::is_same_qanda`]: same question and (same phone or same email).
//!   Drives duplicate detection in [`UniqueList`](super::unique_list::UniqueList).
//! - `PartialEq`: every field equal, tags compared as a set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{Answer, Email, Phone, Question, Tag};
use super::unique_list::Identity;

/// A question/answer flashcard
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QAndA {
    question: Question,

    #[serde(default)]
    phone: Phone,

    #[serde(default)]
    email: Email,

    answer: Answer,

    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl QAndA {
    /// Create an entry with every field present
    pub fn new(
        question: Question,
        phone: Phone,
        email: Email,
        answer: Answer,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            question,
            phone,
            email,
            answer,
            tags,
        }
    }

    /// Create an entry without contact details; phone and email take
    /// their placeholder values
    pub fn without_contact(question: Question, answer: Answer, tags: BTreeSet<Tag>) -> Self {
        Self::new(question, Phone::placeholder(), Email::placeholder(), answer, tags)
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Check whether the entry carries a tag
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Weaker notion of equality: same question, plus at least one other
    /// identity field in common
    pub fn is_same_qanda(&self, other: &QAndA) -> bool {
        std::ptr::eq(self, other)
            || (self.question == other.question
                && (self.phone == other.phone || self.email == other.email))
    }

    /// Build a replacement entry, keeping every field not given
    pub fn with_changes(&self, changes: &QAndAChanges) -> QAndA {
        QAndA {
            question: changes.question.clone().unwrap_or_else(|| self.question.clone()),
            phone: changes.phone.clone().unwrap_or_else(|| self.phone.clone()),
            email: changes.email.clone().unwrap_or_else(|| self.email.clone()),
            answer: changes.answer.clone().unwrap_or_else(|| self.answer.clone()),
            tags: changes.tags.clone().unwrap_or_else(|| self.tags.clone()),
        }
    }
}

impl Identity for QAndA {
    fn is_same_identity(&self, other: &Self) -> bool {
        self.is_same_qanda(other)
    }
}

impl fmt::Display for QAndA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Answer: {} Tags: ",
            self.question, self.phone, self.email, self.answer
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// Optional replacement values for each field of a [`QAndA`]
///
/// A field left as `None` keeps its current value. Setting `tags` to
/// `Some(empty set)` removes every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QAndAChanges {
    pub question: Option<Question>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub answer: Option<Answer>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl QAndAChanges {
    /// Whether at least one field would be changed
    pub fn is_any_field_set(&self) -> bool {
        self.question.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.answer.is_some()
            || self.tags.is_some()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Sample entries shared by unit tests across the crate

    use super::*;
    use crate::core::field::parse_tags;

    pub fn qanda(question: &str, phone: &str, email: &str, answer: &str, tags: &[&str]) -> QAndA {
        QAndA::new(
            Question::new(question).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            Answer::new(answer).unwrap(),
            parse_tags(tags).unwrap(),
        )
    }

    pub fn simple(question: &str, answer: &str, tags: &[&str]) -> QAndA {
        QAndA::without_contact(
            Question::new(question).unwrap(),
            Answer::new(answer).unwrap(),
            parse_tags(tags).unwrap(),
        )
    }

    pub fn heart_rate() -> QAndA {
        qanda(
            "Normal resting heart rate",
            "12345678",
            "amy@example.com",
            "60 to 100 bpm",
            &["cardio"],
        )
    }

    pub fn krebs() -> QAndA {
        qanda(
            "Where does the Krebs cycle occur",
            "87654321",
            "bob@example.com",
            "Mitochondrial matrix",
            &["biochem", "urgent"],
        )
    }
}
