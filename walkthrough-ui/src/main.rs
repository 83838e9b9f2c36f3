//! Interactive terminal front-end for the experiment walkthrough.
//!
//! Hosts the console presenter and serializes user actions into the
//! session: one command at a time, no interleaving during the simulated
//! execution pause. `--script` runs a semicolon-separated command list
//! non-interactively with stable exit codes.

mod command;
mod console;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use walkthrough::core::gate::GateError;
use walkthrough::exit_codes;
use walkthrough::io::catalog::Catalog;
use walkthrough::io::config::load_config;
use walkthrough::io::scheduler::BlockingScheduler;
use walkthrough::session::Session;

use crate::command::Command;
use crate::console::ConsolePresenter;

type UiSession = Session<ConsolePresenter, BlockingScheduler>;

#[derive(Parser)]
#[command(
    name = "walkthrough-ui",
    version,
    about = "Interactive terminal walkthrough of the experiment"
)]
struct Args {
    /// Config file; a missing file falls back to defaults.
    #[arg(long, default_value = "walkthrough.toml")]
    config: PathBuf,

    /// Override the simulated execution delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Run a semicolon-separated command script instead of the prompt.
    #[arg(long)]
    script: Option<String>,
}

/// How an applied command affects the control flow.
enum Applied {
    Continue,
    /// The gate rejected a run; interactive mode keeps going, script mode
    /// stops with [`exit_codes::BLOCKED`].
    Blocked,
    Quit,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("walkthrough_ui=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config =
        load_config(&args.config).with_context(|| format!("load {}", args.config.display()))?;
    if let Some(delay_ms) = args.delay_ms {
        config.execution_delay_ms = delay_ms;
    }
    info!(
        delay_ms = config.execution_delay_ms,
        scripted = args.script.is_some(),
        "starting walkthrough-ui"
    );

    let catalog = Catalog::load_embedded().context("load embedded catalog")?;
    let mut session = Session::new(catalog, config, ConsolePresenter::new(), BlockingScheduler)?;

    match args.script {
        Some(script) => run_script(&mut session, &script),
        None => {
            repl(&mut session)?;
            Ok(exit_codes::OK)
        }
    }
}

fn run_script(session: &mut UiSession, script: &str) -> Result<i32> {
    for raw in script.split(';') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = match command::parse(line) {
            Ok(parsed) => parsed,
            Err(message) => {
                eprintln!("{message}");
                return Ok(exit_codes::INVALID);
            }
        };
        match apply(session, parsed)? {
            Applied::Continue => {}
            Applied::Blocked => return Ok(exit_codes::BLOCKED),
            Applied::Quit => break,
        }
    }
    Ok(exit_codes::OK)
}

fn repl(session: &mut UiSession) -> Result<()> {
    println!(
        "Experiment walkthrough: {}",
        session.catalog().experiment.title
    );
    println!("Type 'help' for commands.\n");
    console::print_status(&session.snapshot(), session.catalog());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("flush stdout")?;

        line.clear();
        let read = stdin.lock().read_line(&mut line).context("read stdin")?;
        if read == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parsed = match command::parse(trimmed) {
            Ok(parsed) => parsed,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        match apply(session, parsed)? {
            Applied::Continue | Applied::Blocked => {}
            Applied::Quit => break,
        }
    }
    Ok(())
}

fn apply(session: &mut UiSession, command: Command) -> Result<Applied> {
    let applied = match command {
        Command::Run(step) => match session.run_step(step) {
            Ok(_) => Applied::Continue,
            Err(err) => match err.downcast_ref::<GateError>() {
                Some(gate_err) => {
                    println!("blocked: {gate_err}");
                    Applied::Blocked
                }
                None => return Err(err),
            },
        },
        Command::RunAll => {
            session.run_remaining(|_| {})?;
            Applied::Continue
        }
        Command::Select(mode) => {
            let outcome = session.select_mode(&mode);
            if outcome.fell_back {
                println!("unknown mode '{mode}', using {}", outcome.mode);
            }
            Applied::Continue
        }
        Command::Status => {
            console::print_status(&session.snapshot(), session.catalog());
            Applied::Continue
        }
        Command::Reset => {
            session.reset();
            Applied::Continue
        }
        Command::Download => {
            session.download_report();
            Applied::Continue
        }
        Command::Help => {
            print_help();
            Applied::Continue
        }
        Command::Quit => Applied::Quit,
    };
    Ok(applied)
}

fn print_help() {
    println!("commands:");
    println!("  run <step>     run one step (the final step may be re-run)");
    println!("  run all        run every remaining step in order");
    println!("  select <mode>  switch visualization mode (rnn, lstm, combined)");
    println!("  status         show step phases");
    println!("  reset          start over");
    println!("  download       download the experiment report");
    println!("  help           this text");
    println!("  quit           leave");
}
