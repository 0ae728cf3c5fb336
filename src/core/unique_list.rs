//! UniqueList - ordered collection without identity duplicates
//!
//! Generic over any entity implementing [`Identity`]. Duplicate detection
//! uses the identity predicate; lookups for removal and replacement use full
//! equality (`PartialEq`), so an edit may change non-identity fields freely.
//!
//! # Key Points
//! - Insertion order is preserved
//! - Every failing operation leaves the list exactly as it was
//! - Deserialization re-checks the invariant

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Identity predicate used for duplicate detection
///
/// Weaker than `PartialEq`: two values can share an identity while differing
/// in data fields.
pub trait Identity {
    fn is_same_identity(&self, other: &Self) -> bool;
}

/// Errors raised by [`UniqueList`] mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The operation would leave two identity-equal elements in the list
    #[error("This {kind} already exists")]
    Duplicate { kind: &'static str },

    /// The target of a remove/replace is not in the list
    #[error("The {kind} does not exist")]
    NotFound { kind: &'static str },
}

/// An ordered list whose elements are unique under [`Identity`]
#[derive(Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
    /// Element name used in error messages
    kind: &'static str,
}

impl<T: Identity + PartialEq> UniqueList<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            items: Vec::new(),
            kind,
        }
    }

    /// Build a list from `items`, failing if two of them share an identity
    pub fn from_vec(kind: &'static str, items: Vec<T>) -> Result<Self, CollectionError> {
        let mut list = Self::new(kind);
        list.set_all(items)?;
        Ok(list)
    }

    /// Whether an element with the same identity is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same_identity(item))
    }

    /// Position of the element fully equal to `item`
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Append an element
    pub fn add(&mut self, item: T) -> Result<(), CollectionError> {
        if self.contains(&item) {
            return Err(self.duplicate());
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the element fully equal to `item`, returning it
    pub fn remove(&mut self, item: &T) -> Result<T, CollectionError> {
        let index = self.position(item).ok_or_else(|| self.not_found())?;
        Ok(self.items.remove(index))
    }

    /// Substitute `replacement` for `target` in place
    ///
    /// `replacement` may share an identity with `target` itself, but with no
    /// other element.
    pub fn replace(&mut self, target: &T, replacement: T) -> Result<T, CollectionError> {
        let index = self.position(target).ok_or_else(|| self.not_found())?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && other.is_same_identity(&replacement));
        if collides {
            return Err(self.duplicate());
        }

        Ok(std::mem::replace(&mut self.items[index], replacement))
    }

    /// Replace the whole contents with `items`
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), CollectionError> {
        if !Self::all_unique(&items) {
            return Err(self.duplicate());
        }
        self.items = items;
        Ok(())
    }

    fn all_unique(items: &[T]) -> bool {
        items.iter().enumerate().all(|(i, a)| {
            items[i + 1..]
                .iter()
                .all(|b| !a.is_same_identity(b))
        })
    }

    fn duplicate(&self) -> CollectionError {
        CollectionError::Duplicate { kind: self.kind }
    }

    fn not_found(&self) -> CollectionError {
        CollectionError::NotFound { kind: self.kind }
    }
}

impl<T> UniqueList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for UniqueList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: Serialize> Serialize for UniqueList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Deserializes a plain array, rejecting identity duplicates
///
/// The element name in errors is the generic "entry"; owners that need a
/// specific name rebuild the list with [`UniqueList::from_vec`].
impl<'de, T> Deserialize<'de> for UniqueList<T>
where
    T: Deserialize<'de> + Identity + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        UniqueList::from_vec("entry", items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::qanda::fixtures::*;
    use crate::core::qanda::QAndA;

    fn list(items: Vec<QAndA>) -> UniqueList<QAndA> {
        UniqueList::from_vec("entry", items).unwrap()
    }

    #[test]
    fn test_add_rejects_same_identity() {
        // question Q1 + phone, then question Q1 + same email
        let original = qanda("Q1", "12345678", "amy@example.com", "A1", &[]);
        let clash = qanda("Q1", "999", "amy@example.com", "Other", &["x"]);

        let mut entries = list(vec![original]);
        let err = entries.add(clash).unwrap_err();

        assert_eq!(err, CollectionError::Duplicate { kind: "entry" });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut entries = UniqueList::new("entry");
        entries.add(heart_rate()).unwrap();
        entries.add(krebs()).unwrap();

        assert_eq!(entries[0], heart_rate());
        assert_eq!(entries[1], krebs());
        assert!(entries.contains(&krebs()));
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut entries = list(vec![heart_rate()]);
        let err = entries.remove(&krebs()).unwrap_err();

        assert_eq!(err, CollectionError::NotFound { kind: "entry" });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remove_uses_full_equality() {
        let mut entries = list(vec![heart_rate()]);
        // same identity, different answer: not removable
        let same_identity = heart_rate().with_changes(&crate::core::qanda::QAndAChanges {
            answer: Some(crate::core::field::Answer::new("changed").unwrap()),
            ..Default::default()
        });
        assert!(entries.remove(&same_identity).is_err());

        let removed = entries.remove(&heart_rate()).unwrap();
        assert_eq!(removed, heart_rate());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_replace_in_place() {
        let third = simple("What is ATP", "Energy", &[]);
        let mut entries = list(vec![heart_rate(), krebs(), third.clone()]);

        let replacement = simple("What is ADP", "Spent energy", &[]);
        let old = entries.replace(&krebs(), replacement.clone()).unwrap();

        assert_eq!(old, krebs());
        assert_eq!(entries.as_slice(), &[heart_rate(), replacement, third]);
    }

    #[test]
    fn test_replace_with_same_identity_allowed() {
        let mut entries = list(vec![heart_rate()]);
        let edited = qanda(
            "Normal resting heart rate",
            "12345678",
            "amy@example.com",
            "Sixty to one hundred",
            &[],
        );
        entries.replace(&heart_rate(), edited.clone()).unwrap();
        assert_eq!(entries[0], edited);
    }

    #[test]
    fn test_replace_colliding_with_other_fails() {
        let mut entries = list(vec![heart_rate(), krebs()]);
        let err = entries.replace(&heart_rate(), krebs()).unwrap_err();

        assert_eq!(err, CollectionError::Duplicate { kind: "entry" });
        assert_eq!(entries.as_slice(), &[heart_rate(), krebs()]);
    }

    #[test]
    fn test_replace_missing_target_fails() {
        let mut entries = list(vec![heart_rate()]);
        let err = entries.replace(&krebs(), krebs()).unwrap_err();
        assert_eq!(err, CollectionError::NotFound { kind: "entry" });
    }

    #[test]
    fn test_replace_round_trip_restores_original() {
        let x = krebs();
        let y = simple("What is ADP", "Spent energy", &[]);
        let mut entries = list(vec![heart_rate(), x.clone(), simple("Q3", "A3", &[])]);
        let before = entries.clone();

        entries.replace(&x, y.clone()).unwrap();
        entries.replace(&y, x).unwrap();

        assert_eq!(entries, before);
    }

    #[test]
    fn test_set_all_rejects_internal_duplicates() {
        let mut entries = list(vec![heart_rate()]);
        let err = entries.set_all(vec![krebs(), krebs()]).unwrap_err();

        assert_eq!(err, CollectionError::Duplicate { kind: "entry" });
        assert_eq!(entries.as_slice(), &[heart_rate()]);

        entries.set_all(vec![krebs()]).unwrap();
        assert_eq!(entries.as_slice(), &[krebs()]);
    }

    #[test]
    fn test_identity_invariant_over_mixed_operations() {
        let candidates = vec![
            heart_rate(),
            krebs(),
            simple("Q1", "A1", &[]),
            simple("Q1", "A2", &["x"]),
            qanda("Normal resting heart rate", "1111", "amy@example.com", "dup", &[]),
            qanda("Q1", "555", "q1@example.com", "A", &[]),
        ];

        let mut entries = UniqueList::new("entry");
        for candidate in &candidates {
            let _ = entries.add(candidate.clone());
        }
        for (target, replacement) in candidates.iter().zip(candidates.iter().rev()) {
            let _ = entries.replace(target, replacement.clone());
        }

        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                assert!(!a.is_same_identity(b));
            }
        }
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[
            {"question":"What is ATP","answer":"Energy"},
            {"question":"What is ATP","answer":"Again"}
        ]"#;
        let result: Result<UniqueList<QAndA>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
