//! Non-fatal findings collected during a run.
//!
//! Each finding is self-contained so the reporter can print it without
//! going back to the AST:
//! - [`ResolutionGap`]: a `className` expression whose classes could not be
//!   derived statically. Its classes are NOT retained.
//! - [`SkippedFile`]: a source file that could not be read or parsed.

use std::fmt;

use crate::core::SourceContext;
use crate::error::ParseError;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where in a `className` value the unresolvable expression sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GapReason {
    /// The whole attribute expression: `className={styles.icon}`
    Expression,
    /// A `${...}` slot of a template literal: `` `icon-${name}` ``
    TemplateSlot,
    /// An argument of a classnames-style call: `cx(isOn && "a")`
    HelperArgument,
}

impl fmt::Display for GapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapReason::Expression => write!(f, "className expression"),
            GapReason::TemplateSlot => write!(f, "template literal slot"),
            GapReason::HelperArgument => write!(f, "class helper argument"),
        }
    }
}

/// A dynamic class expression that cannot be resolved to literal class names.
///
/// Classes built from it are left out of the used-class set, so the
/// matching glyphs may be purged even if they are used at runtime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolutionGap {
    pub context: SourceContext,
    pub reason: GapReason,
    /// Human-readable expression kind, e.g. ``identifier `suffix` ``.
    pub expression: String,
}

impl ResolutionGap {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn message(&self) -> String {
        format!(
            "{} is not a literal ({}); classes derived from it are not retained",
            self.reason, self.expression
        )
    }
}

/// Why a source file contributed nothing to the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unreadable(String),
    Parse(ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_path: String,
    pub reason: SkipReason,
}

impl SkippedFile {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn message(&self) -> String {
        match &self.reason {
            SkipReason::Unreadable(err) => {
                format!("skipped {}: cannot read file ({})", self.file_path, err)
            }
            SkipReason::Parse(err) => format!(
                "skipped {}: parse error at {}:{}: {}",
                self.file_path, err.line, err.col, err.message
            ),
        }
    }
}
