//! lesswatch CLI - recompile LESS stylesheets and their dependents on change
//!
//! Usage: lesswatch [--src <DIR>] [--once] [--json] [--color <WHEN>] [-v...]

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.once {
        commands::once::cmd_once(&cli.src, cli.json, cli.color, cli.verbose)
    } else {
        commands::watch::cmd_watch(&cli.src, cli.json, cli.color, cli.verbose)
    }
}
