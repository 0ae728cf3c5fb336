//! medmoriser - question bank for memorising Q&A flashcards
//!
//! ## Key Concepts
//!
//! - **Entry (`QAndA`)**: question, answer, optional contact details, tags
//! - **Question set**: a named group of entries; an entry is in at most one
//! - **Identity vs equality**: duplicates are judged by identity, removal and
//!   replacement target an exact entry
//! - **Model**: the bank plus a live filtered view that commands index into

pub mod cli;
pub mod config;
pub mod core;
pub mod storage;

pub use core::command::{Command, CommandError, CommandResult};
pub use core::medmoriser::Medmoriser;
pub use core::model::Model;
pub use core::qanda::QAndA;
pub use core::question_set::QuestionSet;
pub use storage::{JsonMedmoriserStorage, MedmoriserStorage};
