use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::{CommandKind, CommandResult, CommandSummary, ScanSummary};
use crate::cli::args::ScanCommand;
use crate::core::PurgeContext;

/// Dry run: everything `purge` does up to, but not including, writing.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = PurgeContext::new(&cmd.common.root, cmd.common.config.as_deref())?;
    let analysis = ctx.analyze()?;

    Ok(CommandResult {
        kind: CommandKind::Scan,
        summary: CommandSummary::Scan(ScanSummary { analysis }),
        exit_status: ExitStatus::Success,
    })
}
