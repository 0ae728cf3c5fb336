//! `medmoriser clear` command
//!
//! Asks for confirmation unless `--yes` is given. Without a terminal to
//! ask on, `--yes` is required.
//!
//! # Usage
//! ```bash
//! medmoriser clear
//! medmoriser clear --yes
//! ```

use std::io::IsTerminal;

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::Confirm;

use super::output;
use super::utils::{execute, AppContext};
use crate::core::command::ClearCommand;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: ClearArgs, ctx: &AppContext) -> Result<()> {
    if !args.yes {
        if !std::io::stdin().is_terminal() {
            bail!("Refusing to clear without confirmation. Pass --yes to proceed.");
        }

        let confirmed = Confirm::new()
            .with_prompt("Delete every entry and question set?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let (result, _) = execute(ctx, ClearCommand)?;
    output::print_result(&result, ctx.format)
}
