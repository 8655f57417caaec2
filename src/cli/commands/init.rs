use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::super::exit_status::ExitStatus;
use super::{CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::cli::args::InitCommand;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.root.join(CONFIG_FILE_NAME);

    let created = !config_path.exists();
    if created {
        write_template(&config_path)?;
    }

    Ok(CommandResult {
        kind: CommandKind::Init,
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
        exit_status: if created {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        },
    })
}

fn write_template(path: &Path) -> Result<()> {
    fs::write(path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
