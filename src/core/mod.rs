//! Core module - Business logic
//!
//! The in-memory store and the command engine. Nothing here touches the
//! filesystem or the terminal.

pub mod command;
pub mod field;
pub mod medmoriser;
pub mod model;
pub mod predicate;
pub mod qanda;
pub mod question_set;
pub mod unique_list;
