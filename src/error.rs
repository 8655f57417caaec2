//! Error types for the failures a purge run can hit.
//!
//! Fatal errors (`ConfigError`, `SubsetError`, `CssSyntaxError`) abort the run.
//! `ParseError` is per file: the file is skipped and the scan continues.
//! Statically unresolvable class expressions are not errors at all; see
//! [`crate::issues::ResolutionGap`].

use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration file {} must contain a JSON object: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every violated constraint, in field order.
    #[error("invalid configuration in {}:\n{}", .path.display(), bullet_list(.violations))]
    Invalid {
        path: PathBuf,
        violations: Vec<String>,
    },
}

/// A source file that could not be parsed. 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file_path}:{line}:{col}: {message}")]
pub struct ParseError {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
}

/// Stylesheet text that the CSS tree builder could not make sense of.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CSS syntax error at {line}:{col}: {message}")]
pub struct CssSyntaxError {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubsetError {
    #[error("failed to launch font subsetter `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("font subsetter `{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to prepare output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
