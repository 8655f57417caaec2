use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::{CommandKind, CommandResult, CommandSummary, PurgeSummary};
use crate::cli::args::PurgeCommand;
use crate::core::{CommandSubsetter, PurgeContext, emit::emit};

pub fn purge(cmd: PurgeCommand) -> Result<CommandResult> {
    let ctx = PurgeContext::new(&cmd.common.root, cmd.common.config.as_deref())?;
    let analysis = ctx.analyze()?;

    // Subsetting is the only async step.
    let subsetter = CommandSubsetter::new(cmd.subsetter);
    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(emit(&subsetter, &analysis.plan, &analysis.css_text))?;

    Ok(CommandResult {
        kind: CommandKind::Purge,
        summary: CommandSummary::Purge(PurgeSummary { analysis, outcome }),
        exit_status: ExitStatus::Success,
    })
}
