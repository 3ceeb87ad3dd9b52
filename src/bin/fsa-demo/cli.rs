//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Drive a finite state automaton over one line of input.
#[derive(Parser, Debug, Clone)]
#[command(name = "fsa-demo")]
#[command(about = "Feed a line of input through a finite state automaton")]
#[command(version)]
pub struct Cli {
    /// Input to process. Prompted for on stdin when omitted.
    #[arg(long, short)]
    pub input: Option<String>,

    /// JSON automaton definition. Defaults to the binary mod-3 automaton.
    #[arg(long, short)]
    pub definition: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
