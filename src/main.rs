//! AddressBook - Main entry point
//!
//! Runs an interactive command loop over stdin/stdout. Logs go to stderr so
//! they never interleave with command output.

use addressbook::commands::CommandContext;
use addressbook::{parser, CommandResult, Config};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DIVIDER: &str = "===================================================";

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the user)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut ctx = CommandContext::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\nWelcome to your Address Book!\n{}", DIVIDER, DIVIDER)?;

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("End of input, shutting down");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parser::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!(input = %line.trim(), "Rejected input: {}", e);
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match command.execute(&mut ctx) {
            Ok(result) => render(&mut stdout, &result)?,
            Err(e) => {
                debug!(command = command.word(), "Command failed: {}", e);
                writeln!(stdout, "{}", e)?;
            }
        }

        if command.is_exit() {
            break;
        }
    }

    info!(persons = ctx.book().len(), "Address book session complete");
    Ok(())
}

/// Print the listing (if any) followed by the feedback message.
fn render(out: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    for (i, person) in result.persons().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, person.as_text_hide_private())?;
    }
    writeln!(out, "{}", result.feedback)?;
    writeln!(out, "{}", DIVIDER)
}
