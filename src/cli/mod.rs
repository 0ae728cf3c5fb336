//! CLI module - Command definitions and handlers
//!
//! Each subcommand turns its arguments into a core command, runs it
//! against the model loaded from storage and prints the result.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod init;
pub mod list;
pub mod output;
pub mod set;
pub mod stats;
pub mod utils;

/// medmoriser - question bank for memorising Q&A flashcards
#[derive(Parser, Debug)]
#[command(name = "medmoriser")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path
    #[arg(short, long, global = true, env = "MEDMORISER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data file path (overrides config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new medmoriser directory
    Init(init::InitArgs),

    /// Add a new question/answer entry
    Add(add::AddArgs),

    /// Edit an entry by its list index
    Edit(edit::EditArgs),

    /// Delete an entry by its list index
    Delete(delete::DeleteArgs),

    /// Find entries by keywords in question or answer
    Find(find::FindArgs),

    /// List entries, optionally only those with some tags
    List(list::ListArgs),

    /// Delete every entry and question set
    Clear(clear::ClearArgs),

    /// Manage question sets
    Set(set::SetArgs),

    /// Show question bank statistics
    Stats(stats::StatsArgs),
}
