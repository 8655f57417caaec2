use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, purge::purge, scan::scan},
};

/// Dispatch to the command handler.
///
/// Returns `Err` when the run aborts (configuration, stylesheet or
/// subsetting failure); the caller maps that to exit status 2.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Purge(cmd)) => purge(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
