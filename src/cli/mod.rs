//! Command-line layer: argument parsing, command dispatch and terminal output.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{init::init, sync::sync, translate::translate};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help().and_then(|args| args.command) else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Sync(cmd) => sync(cmd),
        Command::Translate(cmd) => translate(cmd),
        Command::Init => init(),
    }
}
