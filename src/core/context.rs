use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    core::{
        emit::{EmitPlan, missing_glyphs},
        extract::{FileClassUsage, extract_file_classes},
        file_scanner::scan_files,
        parsers::css::Stylesheet,
        reconcile::{RetainedSet, pruned_css, reconcile},
        stylesheet::StylesheetIndex,
    },
    issues::{ResolutionGap, SkipReason, SkippedFile},
};

/// Output of the scan phase.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Source files visited, in walk order.
    pub files: Vec<String>,
    /// Every class referenced by a scanned file, plus `excludeClasses`.
    pub used_classes: BTreeSet<String>,
    pub gaps: Vec<ResolutionGap>,
    pub skipped_files: Vec<SkippedFile>,
    /// Directory entries the walker could not read.
    pub walk_warnings: Vec<String>,
}

/// Everything known before anything is written.
#[derive(Debug)]
pub struct PurgeAnalysis {
    pub scan: ScanReport,
    pub index: StylesheetIndex,
    pub retained: RetainedSet,
    /// Pruned stylesheet text, ready to be written.
    pub css_text: String,
    pub plan: EmitPlan,
    /// Problems found while checking the retained glyphs against the font.
    pub font_warnings: Vec<String>,
}

/// One purge run over a project.
///
/// The configuration is loaded and validated up front; a bad configuration
/// aborts before any file is scanned.
pub struct PurgeContext {
    pub config: Config,
    /// Project root; every configured path is relative to it.
    pub root_dir: PathBuf,
}

impl PurgeContext {
    pub fn new(root_dir: impl Into<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let root_dir = root_dir.into();
        let config = load_config(&root_dir, config_path)?;

        Ok(Self { config, root_dir })
    }

    pub fn css_path(&self) -> PathBuf {
        self.config.css_path(&self.root_dir)
    }

    pub fn font_path(&self) -> PathBuf {
        self.config.font_path(&self.root_dir)
    }

    /// Walk the entry directories and extract class usage from every file.
    pub fn scan(&self) -> ScanReport {
        let scan = scan_files(
            &self.config.entry_dirs(&self.root_dir),
            &self.config.excluded_paths(&self.root_dir),
        );

        let mut report = extract_files(&scan.files);
        report
            .used_classes
            .extend(self.config.exclude_classes.iter().cloned());
        report.walk_warnings = scan.warnings;
        report.files = scan.files;
        report
    }

    /// Scan, index the stylesheet, reconcile and plan the output.
    ///
    /// # Errors
    ///
    /// Fails if the stylesheet cannot be read or parsed.
    pub fn analyze(&self) -> Result<PurgeAnalysis> {
        let scan = self.scan();

        let css_path = self.css_path();
        let css = fs::read_to_string(&css_path)
            .with_context(|| format!("Failed to read stylesheet {}", css_path.display()))?;
        let stylesheet = Stylesheet::parse(&css)
            .with_context(|| format!("Failed to parse stylesheet {}", css_path.display()))?;

        let index = StylesheetIndex::build(&stylesheet, &scan.used_classes);
        let retained = reconcile(&scan.used_classes, &index);
        let css_text = pruned_css(stylesheet, &retained, &self.config.icon_prefix);

        let font_path = self.font_path();
        let plan = EmitPlan::new(&retained, &font_path, &css_path);
        let font_warnings = if plan.is_empty() {
            Vec::new()
        } else {
            check_font_glyphs(&font_path, &plan)
        };

        Ok(PurgeAnalysis {
            scan,
            index,
            retained,
            css_text,
            plan,
            font_warnings,
        })
    }
}

/// Read, parse and extract every file in parallel, then merge the per-file
/// results in file order.
pub fn extract_files(files: &[String]) -> ScanReport {
    let results: Vec<(String, Result<FileClassUsage, SkipReason>)> = files
        .par_iter()
        .map(|file_path| {
            let usage = fs::read_to_string(file_path)
                .map_err(|e| SkipReason::Unreadable(e.to_string()))
                .and_then(|code| extract_file_classes(code, file_path).map_err(SkipReason::Parse));
            (file_path.clone(), usage)
        })
        .collect();

    let mut report = ScanReport::default();
    for (file_path, result) in results {
        match result {
            Ok(usage) => {
                report.used_classes.extend(usage.classes);
                report.gaps.extend(usage.gaps);
            }
            Err(reason) => report.skipped_files.push(SkippedFile { file_path, reason }),
        }
    }
    report
}

fn check_font_glyphs(font_path: &Path, plan: &EmitPlan) -> Vec<String> {
    let data = match fs::read(font_path) {
        Ok(data) => data,
        Err(e) => return vec![format!("cannot inspect font {}: {}", font_path.display(), e)],
    };

    match missing_glyphs(&data, &plan.glyphs) {
        Ok(missing) => missing
            .into_iter()
            .map(|(class_name, c)| {
                format!(
                    "font has no glyph for `{}` (U+{:04X}); the subset will not contain it",
                    class_name, c as u32
                )
            })
            .collect(),
        Err(e) => vec![format!(
            "cannot inspect font {}: {}; subsetting it anyway",
            font_path.display(),
            e
        )],
    }
}
