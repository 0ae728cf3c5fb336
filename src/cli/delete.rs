//! `medmoriser delete` command
//!
//! # Usage
//! ```bash
//! medmoriser delete 3
//! ```

use anyhow::Result;
use clap::Args;

use super::output;
use super::utils::{execute, parse_index, AppContext};
use crate::core::command::{DeleteCommand, Index};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Index of the entry in the list (starting at 1)
    #[arg(value_parser = parse_index)]
    pub index: Index,
}

pub fn run(args: DeleteArgs, ctx: &AppContext) -> Result<()> {
    let (result, _) = execute(ctx, DeleteCommand::new(args.index))?;
    output::print_result(&result, ctx.format)
}
