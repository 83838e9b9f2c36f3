//! Static-data inspection CLI for the walkthrough catalog.
//!
//! The simulation itself is interactive and lives in `walkthrough-ui`; this
//! binary only validates and lists the embedded static data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use walkthrough::core::mode::VizMode;
use walkthrough::exit_codes;
use walkthrough::io::catalog::Catalog;
use walkthrough::io::config::load_config;
use walkthrough::logging;

#[derive(Parser)]
#[command(
    name = "walkthrough",
    version,
    about = "Inspect the embedded experiment walkthrough catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the embedded catalog (schema + invariants) and, if given, a
    /// config file.
    Validate {
        /// Optional walkthrough.toml to validate alongside the catalog.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the step plan in run order.
    Steps,
    /// Print the artifact table for one visualization mode.
    Artifacts {
        /// Mode to list (rnn, lstm, or combined).
        #[arg(default_value = "combined")]
        mode: String,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate { config } => cmd_validate(config.as_deref()),
        Command::Steps => cmd_steps(),
        Command::Artifacts { mode } => cmd_artifacts(&mode),
    }
}

fn cmd_validate(config: Option<&std::path::Path>) -> Result<()> {
    let catalog = Catalog::load_embedded().context("load embedded catalog")?;
    if let Some(path) = config {
        load_config(path).with_context(|| format!("load {}", path.display()))?;
    }
    println!(
        "catalog ok: {} steps, {} visualization modes",
        catalog.total_steps(),
        VizMode::ALL.len()
    );
    Ok(())
}

fn cmd_steps() -> Result<()> {
    let catalog = Catalog::load_embedded().context("load embedded catalog")?;
    for step in &catalog.steps {
        println!("{}. {}", step.id, step.title);
    }
    Ok(())
}

fn cmd_artifacts(mode: &str) -> Result<()> {
    let catalog = Catalog::load_embedded().context("load embedded catalog")?;
    let mode = VizMode::parse(mode)?;
    for (slot, artifact) in catalog.artifact_set(mode).entries() {
        println!("{:16} {} ({})", slot.as_str(), artifact.title, artifact.path);
    }
    Ok(())
}
