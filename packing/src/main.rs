//! Terminal front end for the packing list.
//!
//! Reads one command per line from stdin. `clear` asks for confirmation on
//! the same terminal. Logs go to stderr; set `RUST_LOG` to change verbosity.

use anyhow::Context;
use far_away::shell::{Reply, Shell};
use far_away::{ListStore, PackingConfig};
use far_away_core::environment::Confirmation;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Asks yes/no questions on the terminal
struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if let Err(error) = io::stdout().flush() {
            tracing::warn!(%error, "Could not show confirmation prompt, declining");
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(error) => {
                tracing::warn!(%error, "Could not read confirmation, declining");
                false
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "far_away=info,far_away_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    far_away_runtime::metrics::register_metrics();

    let config = PackingConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let list = ListStore::new(config.initial_state()).with_confirmation(TerminalConfirmation);
    let mut shell = Shell::new(list, &config);

    println!("=== Far Away: what do you need for your trip? ===\n");
    println!("{}", shell.render());
    println!("\nType 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to write prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match shell.handle_line(&line) {
            Ok(Reply::Output(output)) => println!("{output}"),
            Ok(Reply::Quit) => break,
            Err(error) => println!("{error}"),
        }
    }

    println!("Bon voyage!");
    Ok(())
}
