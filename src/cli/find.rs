//! `medmoriser find` command
//!
//! Whole-word, case-insensitive match against question and answer. An entry
//! is shown when any keyword matches.
//!
//! # Usage
//! ```bash
//! medmoriser find heart
//! medmoriser find krebs atp --format json
//! ```

use anyhow::Result;
use clap::Args;

use super::output;
use super::utils::{execute, AppContext};
use crate::core::command::FindCommand;
use crate::core::predicate::KeywordsPredicate;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Keywords to look for
    #[arg(required = true, num_args = 1..)]
    pub keywords: Vec<String>,
}

pub fn run(args: FindArgs, ctx: &AppContext) -> Result<()> {
    let command = FindCommand::new(KeywordsPredicate::new(args.keywords));
    let (result, model) = execute(ctx, command)?;
    output::print_listing(&result, model.filtered_qandas(), ctx.format)
}
