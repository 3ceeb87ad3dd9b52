//! Demonstration binary.
//!
//! Reads one line of input, feeds it character by character through an
//! automaton and prints the label of the final state. Any error is fatal.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use fsa::definition::AutomatonDefinition;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let definition = match &cli.definition {
        Some(path) => AutomatonDefinition::from_path(path)?,
        None => AutomatonDefinition::binary_mod_three(),
    };

    let input = match cli.input {
        Some(input) => input,
        None => prompt("Enter input (string of 0 and 1 only): ")?,
    };
    tracing::info!(input = %input, "processing input");

    let mut automaton = definition.into_automaton();
    let label = automaton.run_str(&input)?;
    tracing::debug!(log = ?automaton.transition_log().entries(), "run complete");

    println!("{label}");
    Ok(())
}

/// Print `message` and read the first whitespace-delimited token of a line.
fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}
