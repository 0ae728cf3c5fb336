//! `medmoriser list` command
//!
//! # Usage
//! ```bash
//! medmoriser list                 # Every entry
//! medmoriser list -t urgent,exam  # Entries with any of these tags
//! ```

use anyhow::Result;
use clap::Args;

use super::output;
use super::utils::{execute, AppContext};
use crate::core::command::ListCommand;
use crate::core::field::parse_tags;
use crate::core::predicate::TagsPredicate;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries carrying at least one of these tags
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

pub fn run(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let command = if args.tags.is_empty() {
        ListCommand::all()
    } else {
        ListCommand::tagged(TagsPredicate::new(parse_tags(&args.tags)?))
    };

    let (result, model) = execute(ctx, command)?;
    output::print_listing(&result, model.filtered_qandas(), ctx.format)
}
