//! Field types - validated value objects
//!
//! Every component of a [`QAndA`](super::qanda::QAndA) is a newtype over
//! `String` that can only be built from input passing its `is_valid` check.
//!
//! # Key Points
//! - Constructors trim surrounding whitespace, then validate
//! - Deserialization goes through the same constructor, so a data file can
//!   never smuggle in an invalid value
//! - `Phone` and `Email` carry placeholder values for entries created
//!   without contact details

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a field is constructed from malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {constraint}")]
pub struct ValidationError {
    /// Field name (e.g. "phone")
    pub field: &'static str,
    /// Human readable constraint that was violated
    pub constraint: &'static str,
}

/// Implements the shared plumbing of a validated string field.
///
/// The type must provide `FIELD`, `MESSAGE_CONSTRAINTS` and `is_valid`.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            /// Build the field from raw input, trimming surrounding whitespace
            pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
                let trimmed = raw.as_ref().trim();
                if !Self::is_valid(trimmed) {
                    return Err(ValidationError {
                        field: Self::FIELD,
                        constraint: Self::MESSAGE_CONSTRAINTS,
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Text that is non-blank and does not start with whitespace
fn is_non_blank_text(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// The question side of a flashcard
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question(String);

impl Question {
    pub const FIELD: &'static str = "question";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Questions can take any values, and they should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        is_non_blank_text(raw)
    }
}

string_field!(Question);

/// The answer side of a flashcard
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Answer(String);

impl Answer {
    pub const FIELD: &'static str = "answer";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Answers can take any values, and they should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        is_non_blank_text(raw)
    }
}

string_field!(Answer);

/// Contact phone number attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const FIELD: &'static str = "phone";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";
    /// Value used when an entry is created without a phone number
    pub const PLACEHOLDER: &'static str = "00000000";

    pub fn is_valid(raw: &str) -> bool {
        raw.len() >= 3 && raw.chars().all(|c| c.is_ascii_digit())
    }

    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::placeholder()
    }
}

string_field!(Phone);

/// Contact email attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const FIELD: &'static str = "email";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain. The local-part may only contain \
         alphanumerics and +_.- and may not start or end with a special character. The domain \
         is made of labels separated by periods or hyphens; each label starts and ends with \
         an alphanumeric and the last label is at least 2 characters long";
    /// Value used when an entry is created without an email
    pub const PLACEHOLDER: &'static str = "toBeIgnoredNow@email.com";

    pub fn is_valid(raw: &str) -> bool {
        let Some((local, domain)) = raw.split_once('@') else {
            return false;
        };
        Self::is_valid_local_part(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local_part(local: &str) -> bool {
        const SPECIAL: &[char] = &['+', '_', '.', '-'];

        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || SPECIAL.contains(&c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let Some(last) = labels.last() else {
            return false;
        };
        if last.len() < 2 {
            return false;
        }

        labels.iter().all(|label| {
            // A label is alphanumeric runs joined by single hyphens
            !label.is_empty()
                && label
                    .split('-')
                    .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()))
        })
    }

    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::placeholder()
    }
}

string_field!(Email);

/// Single-word label used to group and filter entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const FIELD: &'static str = "tag";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_alphanumeric())
    }
}

string_field!(Tag);

/// Name of a question set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetName(String);

impl SetName {
    pub const FIELD: &'static str = "set name";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Set names should only contain ASCII letters, digits and spaces, and should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    /// Names are compared ignoring ASCII case when deciding identity
    pub fn eq_ignore_case(&self, other: &SetName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

string_field!(SetName);

/// Parse a list of raw tags, failing on the first invalid one
pub fn parse_tags<I, S>(raw: I) -> Result<std::collections::BTreeSet<Tag>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(Tag::new).collect()
}
