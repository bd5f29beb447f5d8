//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin one line at a time until `exit` or end of input,
//! then saves the address book.

use anyhow::{Context, Result};
use contact_assistant::{Assistant, Config, JsonFileRepository};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout is the conversation with the user)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(&config.book_path);
    let mut assistant = Assistant::load(repository).with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.book_path.display()
        )
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    writeln!(stdout, "Enter a command:")?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read from stdin")?,
            None => {
                // End of input behaves like `exit`
                writeln!(stdout)?;
                if let Err(e) = assistant.save() {
                    error!("Failed to save address book: {}", e);
                    return Err(e.into());
                }
                break;
            }
        };

        let outcome = assistant.handle_line(&line);
        writeln!(stdout, "{}", outcome.reply)?;

        if outcome.stop {
            break;
        }
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
