use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod purge;
mod scan;

const BIN_NAME: &str = "icon-purge";

pub const CONFIG: &str = r#"{
  "entry": ["src"],
  "iconfontCssPath": "src/assets/iconfont/iconfont.css",
  "fontTTFPath": "src/assets/iconfont/iconfont.ttf",
  "iconPrefix": "icon"
}"#;

pub const ICONFONT_CSS: &str = r#"@font-face {
  font-family: "iconfont";
  src: url('iconfont.ttf?t=1') format('truetype');
}

.icon {
  font-family: "iconfont" !important;
  font-size: 16px;
}

.icon-home:before {
  content: "\e600";
}

.icon-user:before {
  content: "\e601";
}
"#;

/// Stands in for pyftsubset: writes its arguments, one per line, into the
/// `--output-file` it was given.
#[cfg(unix)]
const FAKE_SUBSETTER: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --output-file=*) out="${arg#--output-file=}" ;;
  esac
done
printf '%s\n' "$@" > "$out"
"#;

#[cfg(unix)]
const FAILING_SUBSETTER: &str = r#"#!/bin/sh
echo "cannot subset this font" >&2
exit 3
"#;

pub struct CliTest {
    temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            temp_dir,
            project_dir,
        })
    }

    /// A project with the standard config, stylesheet and font, plus `files`.
    pub fn with_project(files: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file("react-unused-icon-purge.json", CONFIG)?;
        test.write_file("src/assets/iconfont/iconfont.css", ICONFONT_CSS)?;
        test.write_file("src/assets/iconfont/iconfont.ttf", "placeholder font")?;
        for (path, content) in files {
            test.write_file(path, content)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan");
        cmd
    }

    /// `purge` with a script standing in for the font subsetter.
    #[cfg(unix)]
    pub fn purge_command(&self) -> Result<Command> {
        self.purge_command_with(FAKE_SUBSETTER)
    }

    #[cfg(unix)]
    pub fn failing_purge_command(&self) -> Result<Command> {
        self.purge_command_with(FAILING_SUBSETTER)
    }

    #[cfg(unix)]
    fn purge_command_with(&self, script: &str) -> Result<Command> {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.temp_dir.path().join("fake-subsetter.sh");
        fs::write(&script_path, script)?;
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))?;

        let mut cmd = self.command();
        cmd.arg("purge").arg("--subsetter").arg(script_path);
        Ok(cmd)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
