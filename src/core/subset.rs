//! Font subsetting collaborator.
//!
//! Glyph stripping itself is delegated to an external tool. The default is
//! fonttools' `pyftsubset`, run as
//! `pyftsubset <font> --unicodes=U+E600,U+E601 --no-hinting --output-file=<dir>/<font name>`.

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use tokio::process::Command;

use crate::error::SubsetError;

pub const DEFAULT_SUBSETTER: &str = "pyftsubset";

/// One subsetting job: keep only `text`'s characters of `font_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetRequest {
    pub font_path: PathBuf,
    /// Existing directory the subset font is written into.
    pub output_dir: PathBuf,
    /// Every character whose glyph must survive.
    pub text: String,
}

impl SubsetRequest {
    /// Where the subset font lands: the source file name inside `output_dir`.
    pub fn output_font_path(&self) -> PathBuf {
        match self.font_path.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.join("iconfont.ttf"),
        }
    }

    /// `U+E600,U+E601` for the request's text.
    pub fn unicode_ranges(&self) -> String {
        self.text
            .chars()
            .map(|c| format!("U+{:04X}", c as u32))
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub trait FontSubsetter {
    /// Write the subset font and return its path. Resolves once the font is
    /// completely written or the subsetting failed.
    fn subset(&self, request: &SubsetRequest) -> impl Future<Output = Result<PathBuf, SubsetError>>;
}

/// Runs a `pyftsubset`-compatible executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSubsetter {
    pub program: String,
}

impl CommandSubsetter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(&self, request: &SubsetRequest, output_font: &Path) -> Vec<String> {
        vec![
            request.font_path.to_string_lossy().into_owned(),
            format!("--unicodes={}", request.unicode_ranges()),
            "--no-hinting".to_string(),
            format!("--output-file={}", output_font.to_string_lossy()),
        ]
    }
}

impl Default for CommandSubsetter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSETTER)
    }
}

impl FontSubsetter for CommandSubsetter {
    async fn subset(&self, request: &SubsetRequest) -> Result<PathBuf, SubsetError> {
        let output_font = request.output_font_path();

        let output = Command::new(&self.program)
            .args(self.args(request, &output_font))
            .output()
            .await
            .map_err(|source| SubsetError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SubsetError::Failed {
                command: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output_font)
    }
}
