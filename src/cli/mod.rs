pub mod args;
mod commands;
pub mod output;

use std::io::{self, Write};

use clap::Parser;

use crate::errors::Result;

pub use args::Cli;
pub use commands::execute;

/// Parses the process arguments and runs the requested command against stdout.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(cli, &mut handle)?;
    handle.flush()?;
    Ok(())
}
