use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{EmitOutcome, PurgeAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Purge,
    Scan,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Purge(PurgeSummary),
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct PurgeSummary {
    pub analysis: PurgeAnalysis,
    pub outcome: EmitOutcome,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub analysis: PurgeAnalysis,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a configuration file already existed and was left alone.
    pub created: bool,
}

/// Result of running an icon-purge command.
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn analysis(&self) -> Option<&PurgeAnalysis> {
        match &self.summary {
            CommandSummary::Purge(summary) => Some(&summary.analysis),
            CommandSummary::Scan(summary) => Some(&summary.analysis),
            CommandSummary::Init(_) => None,
        }
    }

    /// Number of warnings the run produced.
    pub fn warning_count(&self) -> usize {
        self.analysis().map_or(0, |analysis| {
            analysis.scan.gaps.len()
                + analysis.scan.skipped_files.len()
                + analysis.scan.walk_warnings.len()
                + analysis.plan.warnings.len()
                + analysis.font_warnings.len()
        })
    }
}
