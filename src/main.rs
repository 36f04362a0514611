mod cli;
mod config;
mod convert;
mod event_cmd;
mod logging;
mod render;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Show(args) => show_cmd::run(&args),
        Command::Event(command) => event_cmd::run(&command),
    }
}
