//! medmoriser CLI - Entry point
//!
//! Usage: medmoriser <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medmoriser::cli::utils::AppContext;
use medmoriser::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // init runs before any config or data file exists
    let context = || AppContext::new(cli.config.as_deref(), cli.data.clone(), cli.format);

    match cli.command {
        Commands::Init(args) => medmoriser::cli::init::run(args),
        Commands::Add(args) => medmoriser::cli::add::run(args, &context()?),
        Commands::Edit(args) => medmoriser::cli::edit::run(args, &context()?),
        Commands::Delete(args) => medmoriser::cli::delete::run(args, &context()?),
        Commands::Find(args) => medmoriser::cli::find::run(args, &context()?),
        Commands::List(args) => medmoriser::cli::list::run(args, &context()?),
        Commands::Clear(args) => medmoriser::cli::clear::run(args, &context()?),
        Commands::Set(args) => medmoriser::cli::set::run(args, &context()?),
        Commands::Stats(args) => medmoriser::cli::stats::run(args, &context()?),
    }
}

/// Logs go to stderr. `-v` raises the level; without it `RUST_LOG` decides,
/// falling back to warnings.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity_level(verbosity) {
        Some(level) => EnvFilter::from_default_env().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::INFO),
        2 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}
