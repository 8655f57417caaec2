//! Report formatting and printing utilities.
//!
//! Warnings go to stderr in cargo-style format; the final status goes to
//! stdout. Separate from core logic to allow icon-purge to be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, PurgeSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{EmitOutcome, PurgeAnalysis};
use crate::issues::{ResolutionGap, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    if let Some(analysis) = result.analysis() {
        print_warnings_to(analysis, &mut io::stderr().lock());
        if verbose {
            print_details_to(analysis, &mut io::stdout().lock());
        }
    }

    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Purge(summary) => print_purge_to(summary, &mut stdout),
        CommandSummary::Scan(summary) => print_scan_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

/// Print every non-fatal finding of a run.
pub fn print_warnings_to<W: Write>(analysis: &PurgeAnalysis, writer: &mut W) {
    let scan = &analysis.scan;

    let mut gaps = scan.gaps.clone();
    gaps.sort();
    let max_line_width = gaps
        .iter()
        .map(|gap| gap.context.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);
    for gap in &gaps {
        print_gap(gap, writer, max_line_width);
    }

    let plain = scan
        .skipped_files
        .iter()
        .map(|skipped| skipped.message())
        .chain(scan.walk_warnings.iter().cloned())
        .chain(analysis.plan.warnings.iter().cloned())
        .chain(analysis.font_warnings.iter().cloned());
    for message in plain {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
    }

    if !gaps.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} could not be resolved; icons used only through {} may be purged",
            "warning:".bold().yellow(),
            pluralize(gaps.len(), "className expression", "className expressions"),
            if gaps.len() == 1 { "it" } else { "them" },
        );
    }
}

/// Print the scanned files, the used classes and the retained glyphs.
pub fn print_details_to<W: Write>(analysis: &PurgeAnalysis, writer: &mut W) {
    let scan = &analysis.scan;

    let _ = writeln!(
        writer,
        "{} ({}):",
        "Scanned".bold(),
        pluralize(scan.files.len(), "file", "files")
    );
    for file in &scan.files {
        let _ = writeln!(writer, "  {}", file);
    }

    let _ = writeln!(
        writer,
        "{} ({}):",
        "Used classes".bold(),
        scan.used_classes.len()
    );
    for class in &scan.used_classes {
        let _ = writeln!(writer, "  {}", class);
    }

    let _ = writeln!(
        writer,
        "{} ({}):",
        "Retained glyphs".bold(),
        analysis.retained.len()
    );
    print_retained_to(analysis, writer, true);
}

/// With `show_lines`, each glyph is followed by the stylesheet line that
/// declared it.
fn print_retained_to<W: Write>(analysis: &PurgeAnalysis, writer: &mut W, show_lines: bool) {
    let width = analysis
        .retained
        .keys()
        .map(|class| class.len())
        .max()
        .unwrap_or(0);
    for (class, codepoint) in &analysis.retained {
        let line = analysis
            .index
            .get(class)
            .filter(|_| show_lines)
            .map(|entry| format!("  line {}", entry.line))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "  {:<width$}  {}{}",
            class,
            codepoint.dimmed(),
            line.dimmed(),
            width = width
        );
    }
}

/// Why nothing would be written: no glyph class matched, or every matched
/// codepoint was invalid.
fn nothing_kept(analysis: &PurgeAnalysis) -> &'static str {
    if analysis.retained.is_empty() {
        "no icon glyphs in use"
    } else {
        "no valid codepoints retained"
    }
}

fn print_gap<W: Write>(gap: &ResolutionGap, writer: &mut W, max_line_width: usize) {
    let ctx = &gap.context;
    let severity = match ResolutionGap::severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(writer, "{}: {}", severity, gap.message());
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        ctx.file_path(),
        ctx.line(),
        ctx.col()
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        ctx.line().to_string().blue(),
        "|".blue(),
        ctx.source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = ctx
        .source_line
        .chars()
        .take(ctx.col().saturating_sub(1))
        .collect();
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = UnicodeWidthStr::width(prefix.as_str())
    );
    let _ = writeln!(writer);
}

fn print_purge_to<W: Write>(summary: &PurgeSummary, writer: &mut W) {
    let analysis = &summary.analysis;
    let files = pluralize(analysis.scan.files.len(), "source file", "source files");

    match &summary.outcome {
        EmitOutcome::Skipped => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Scanned {} - {}, nothing written", files, nothing_kept(analysis)).green()
            );
        }
        EmitOutcome::Written {
            font_path,
            css_path,
        } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Scanned {} - kept {}",
                    files,
                    pluralize(analysis.plan.glyphs.len(), "glyph", "glyphs")
                )
                .green()
            );
            let _ = writeln!(writer, "  {} {}", "font:".bold(), font_path.display());
            let _ = writeln!(writer, "  {} {}", "css:".bold(), css_path.display());
        }
    }
}

fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let analysis = &summary.analysis;
    let files = pluralize(analysis.scan.files.len(), "source file", "source files");

    if analysis.plan.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Scanned {} - {}", files, nothing_kept(analysis)).green()
        );
        return;
    }

    print_retained_to(analysis, writer, false);
    let _ = writeln!(
        writer,
        "{} {}",
        "Would write".yellow().bold(),
        analysis.plan.output_dir.display()
    );
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} - {} would be kept",
            files,
            pluralize(analysis.plan.glyphs.len(), "glyph", "glyphs")
        )
        .green()
    );
    let _ = writeln!(writer, "Run {} to write them.", "icon-purge purge".cyan());
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Tests
// ============================================================
