//! `medmoriser init` command
//!
//! Creates a project-local `.medmoriser/` directory.
//!
//! # Usage
//! ```bash
//! medmoriser init                    # Initialize in current directory
//! medmoriser init /path/to/project   # Initialize in specific path
//! medmoriser init --force            # Start over with an empty bank
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;

use crate::config::{Config, CONFIG_FILE, DATA_FILE, LOCAL_DIR};
use crate::core::medmoriser::Medmoriser;
use crate::storage::{JsonMedmoriserStorage, MedmoriserStorage};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Re-initialize, replacing config and data with empty defaults
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let base_path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let local_dir = base_path.join(LOCAL_DIR);

    if is_initialized(&base_path) && !args.force {
        bail!(
            "Directory {} already has a question bank. Use --force to reinitialize.",
            base_path.display()
        );
    }

    fs::create_dir_all(&local_dir)?;

    let config_path = local_dir.join(CONFIG_FILE);
    Config::default().save_to(&config_path)?;

    let storage = JsonMedmoriserStorage::new(local_dir.join(DATA_FILE));
    storage.save(&Medmoriser::new())?;

    println!("Initialized medmoriser in {}", base_path.display());
    println!("   Config: {}", config_path.display());
    println!("   Data:   {}", storage.path().display());
    println!("\nNext steps:");
    println!("  medmoriser add \"Your first question\" \"Its answer\" -t tag");
    println!("  medmoriser list");

    Ok(())
}

fn is_initialized(base_path: &Path) -> bool {
    base_path.join(LOCAL_DIR).join(DATA_FILE).exists()
}
