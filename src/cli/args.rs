//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `purge`: scan, subset the font and write the pruned stylesheet
//! - `scan`: dry run; report what `purge` would keep and write
//! - `init`: write a `react-unused-icon-purge.json` template

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::subset::DEFAULT_SUBSETTER;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Purge(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by `purge` and `scan`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; configured paths are relative to it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (default: <root>/react-unused-icon-purge.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PurgeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// pyftsubset-compatible executable used to subset the font
    #[arg(long, env = "ICON_PURGE_SUBSETTER", default_value = DEFAULT_SUBSETTER)]
    pub subsetter: String,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Subset the icon font and stylesheet to the classes the code uses
    Purge(PurgeCommand),
    /// Report used icon classes without writing anything
    Scan(ScanCommand),
    /// Initialize a new react-unused-icon-purge.json configuration file
    Init(InitCommand),
}
