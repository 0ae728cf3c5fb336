//! Filter predicates for the model's filtered view

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::field::Tag;
use super::qanda::QAndA;

/// A shareable test over entries
///
/// `Arc` so the model can snapshot its active filter cheaply and tests can
/// compare filters by pointer.
pub type Predicate = Arc<dyn Fn(&QAndA) -> bool + Send + Sync>;

/// Predicate admitting every entry
pub fn show_all() -> Predicate {
    Arc::new(|_: &QAndA| true)
}

/// Matches entries whose question or answer contains any keyword as a
/// whole word, ignoring ASCII case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordsPredicate {
    keywords: Vec<String>,
}

impl KeywordsPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.trim().is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, qanda: &QAndA) -> bool {
        let words = || {
            qanda
                .question()
                .as_str()
                .split(|c: char| !c.is_alphanumeric())
                .chain(qanda.answer().as_str().split(|c: char| !c.is_alphanumeric()))
                .filter(|w| !w.is_empty())
        };
        self.keywords
            .iter()
            .any(|keyword| words().any(|word| word.eq_ignore_ascii_case(keyword.trim())))
    }

    pub fn into_predicate(self) -> Predicate {
        Arc::new(move |qanda: &QAndA| self.test(qanda))
    }
}

impl fmt::Display for KeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keywords: {}", self.keywords.join(", "))
    }
}

/// Matches entries carrying at least one of the given tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsPredicate {
    tags: BTreeSet<Tag>,
}

impl TagsPredicate {
    pub fn new(tags: BTreeSet<Tag>) -> Self {
        Self { tags }
    }

    pub fn test(&self, qanda: &QAndA) -> bool {
        self.tags.iter().any(|tag| qanda.has_tag(tag))
    }

    pub fn into_predicate(self) -> Predicate {
        Arc::new(move |qanda: &QAndA| self.test(qanda))
    }
}
