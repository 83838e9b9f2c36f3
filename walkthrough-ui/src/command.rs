//! User command vocabulary for the terminal front-end.

/// One user action at the prompt or in a `--script` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(u8),
    RunAll,
    Select(String),
    Status,
    Reset,
    Download,
    Help,
    Quit,
}

/// Parse a single command line. Returns a stable, user-facing message on
/// failure.
pub fn parse(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let head = parts.next().ok_or_else(|| "empty command".to_string())?;

    let command = match head {
        "run" => match parts.next() {
            Some("all") => Command::RunAll,
            Some(step) => {
                let step: u8 = step
                    .parse()
                    .map_err(|_| format!("'{step}' is not a step number"))?;
                Command::Run(step)
            }
            None => return Err("run expects a step number or 'all'".to_string()),
        },
        "select" => {
            let mode = parts
                .next()
                .ok_or_else(|| "select expects a mode (rnn, lstm, combined)".to_string())?;
            Command::Select(mode.to_string())
        }
        "status" => Command::Status,
        "reset" => Command::Reset,
        "download" => Command::Download,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    if let Some(extra) = parts.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }
    Ok(command)
}
