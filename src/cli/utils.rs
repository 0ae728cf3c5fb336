//! CLI utility functions
//!
//! Shared plumbing for subcommands:
//! - Resolving config, data file and output format (AppContext)
//! - Loading the model, running a command, saving on success (execute)
//! - Argument parsers for clap

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::core::command::{self, Command, CommandResult, Index};
use crate::core::model::Model;
use crate::storage::{JsonMedmoriserStorage, MedmoriserStorage};

/// Everything a subcommand needs from the environment
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub storage: JsonMedmoriserStorage,
    pub format: OutputFormat,
}

impl AppContext {
    /// Resolve config and storage; explicit flags win over config values
    pub fn new(
        config_path: Option<&Path>,
        data: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let config = Config::load(config_path)?;
        let data_file = data.unwrap_or_else(|| config.data_file());
        let format = format.unwrap_or(config.display.format);

        if !config.display.color {
            colored::control::set_override(false);
        }

        debug!(data_file = %data_file.display(), ?format, "resolved context");
        Ok(Self {
            storage: JsonMedmoriserStorage::new(data_file),
            config,
            format,
        })
    }

    /// Model over the stored bank; an absent data file gives an empty bank
    pub fn load_model(&self) -> Result<Model> {
        let medmoriser = self
            .storage
            .load()
            .context("Failed to load question bank")?
            .unwrap_or_default();
        Ok(Model::new(medmoriser))
    }

    pub fn save_model(&self, model: &Model) -> Result<()> {
        self.storage
            .save(model.medmoriser())
            .context("Failed to save question bank")
    }
}

/// Load the model, run `command`, save if it changed data
///
/// Nothing is written when the command fails. The model is returned so the
/// caller can render the filtered view.
pub fn execute<C: Command>(ctx: &AppContext, command: C) -> Result<(CommandResult, Model)> {
    let mut model = ctx.load_model()?;
    let mutates = command.mutates();

    let result = command::run(command, &mut model)?;

    if mutates {
        ctx.save_model(&model)?;
    }
    Ok((result, model))
}

/// Parse a one-based list index
pub fn parse_index(s: &str) -> Result<Index, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a valid index"))?;
    Index::from_one_based(n).ok_or_else(|| "Index must be a positive integer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index(" 12 ").unwrap().one_based(), 12);
        assert!(parse_index("0").is_err());
        assert!(parse_index("-1").is_err());
        assert!(parse_index("one").is_err());
    }
}
