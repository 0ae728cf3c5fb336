//! `medmoriser set` commands
//!
//! Question sets group entries from the bank. An entry belongs to at most
//! one set; deleting a set keeps its entries in the bank.
//!
//! # Usage
//! ```bash
//! medmoriser set create Cardiology
//! medmoriser set add Cardiology 1       # File entry #1 under Cardiology
//! medmoriser set show Cardiology
//! medmoriser set remove Cardiology 1    # #1 of the full list
//! medmoriser set list
//! medmoriser set delete Cardiology
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output;
use super::utils::{execute, parse_index, AppContext};
use crate::config::OutputFormat;
use crate::core::command::{
    AddToSetCommand, CreateSetCommand, DeleteSetCommand, Index, RemoveFromSetCommand,
    ShowSetCommand,
};
use crate::core::field::SetName;
use crate::core::medmoriser::Medmoriser;

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(subcommand)]
    pub action: SetAction,
}

#[derive(Subcommand, Debug)]
pub enum SetAction {
    /// Create an empty question set
    Create { name: String },

    /// Delete a question set (its entries stay in the bank)
    Delete { name: String },

    /// Put an entry into a question set
    Add {
        name: String,
        /// Index of the entry in the list (starting at 1)
        #[arg(value_parser = parse_index)]
        index: Index,
    },

    /// Take an entry out of a question set
    Remove {
        name: String,
        /// Index of the entry in the list (starting at 1)
        #[arg(value_parser = parse_index)]
        index: Index,
    },

    /// List the entries of a question set
    Show { name: String },

    /// List all question sets
    List,
}

pub fn run(args: SetArgs, ctx: &AppContext) -> Result<()> {
    match args.action {
        SetAction::Create { name } => {
            let (result, _) = execute(ctx, CreateSetCommand::new(SetName::new(name)?))?;
            output::print_result(&result, ctx.format)
        }
        SetAction::Delete { name } => {
            let (result, _) = execute(ctx, DeleteSetCommand::new(SetName::new(name)?))?;
            output::print_result(&result, ctx.format)
        }
        SetAction::Add { name, index } => {
            let (result, _) = execute(ctx, AddToSetCommand::new(SetName::new(name)?, index))?;
            output::print_result(&result, ctx.format)
        }
        SetAction::Remove { name, index } => {
            let command = RemoveFromSetCommand::new(SetName::new(name)?, index);
            let (result, _) = execute(ctx, command)?;
            output::print_result(&result, ctx.format)
        }
        SetAction::Show { name } => {
            let (result, model) = execute(ctx, ShowSetCommand::new(SetName::new(name)?))?;
            output::print_listing(&result, model.filtered_qandas(), ctx.format)
        }
        SetAction::List => {
            let model = ctx.load_model()?;
            print_sets(model.medmoriser(), ctx.format)
        }
    }
}

#[derive(Tabled, Serialize)]
struct SetRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

fn set_rows(medmoriser: &Medmoriser) -> Vec<SetRow> {
    medmoriser
        .question_sets()
        .iter()
        .map(|set| SetRow {
            name: set.name().to_string(),
            entries: set.len(),
        })
        .collect()
}

fn print_sets(medmoriser: &Medmoriser, format: OutputFormat) -> Result<()> {
    let rows = set_rows(medmoriser);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Compact => {
            for row in &rows {
                println!("{}\t{}", row.name, row.entries);
            }
        }
        OutputFormat::Pretty => {
            if rows.is_empty() {
                println!("{}", "No question sets yet.".dimmed());
            } else {
                println!("{}", Table::new(&rows).with(Style::rounded()));
            }
        }
    }
    Ok(())
}
