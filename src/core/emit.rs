//! Writes the purged artifacts: the subset font and the pruned stylesheet,
//! both under `<font dir>/<font stem>-min/`.
//!
//! The stylesheet is only written once the subsetter reports success.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::reconcile::RetainedSet;
use crate::core::subset::{FontSubsetter, SubsetRequest};
use crate::error::SubsetError;

/// What the emitter did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Nothing to keep, nothing written.
    Skipped,
    Written { font_path: PathBuf, css_path: PathBuf },
}

/// Everything the emitter needs, computed without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitPlan {
    pub output_dir: PathBuf,
    pub font_path: PathBuf,
    /// Destination of the pruned stylesheet: the source CSS name in `output_dir`.
    pub css_path: PathBuf,
    /// Retained glyphs in class order, one char per valid codepoint.
    pub glyphs: Vec<(String, char)>,
    /// Codepoint literals that are not valid Unicode scalars.
    pub warnings: Vec<String>,
}

impl EmitPlan {
    pub fn new(retained: &RetainedSet, font_path: &Path, css_path: &Path) -> Self {
        let output_dir = min_output_dir(font_path);
        let css_name = css_path.file_name().map(PathBuf::from).unwrap_or_default();

        let mut glyphs = Vec::with_capacity(retained.len());
        let mut warnings = Vec::new();
        for (class_name, literal) in retained {
            match parse_codepoint(literal) {
                Some(c) => glyphs.push((class_name.clone(), c)),
                None => warnings.push(format!(
                    "`{}` has an invalid codepoint `{}`; its glyph is dropped",
                    class_name, literal
                )),
            }
        }

        Self {
            css_path: output_dir.join(css_name),
            output_dir,
            font_path: font_path.to_path_buf(),
            glyphs,
            warnings,
        }
    }

    /// All retained characters, concatenated.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|(_, c)| *c).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// `assets/iconfont-min` for `assets/iconfont.ttf`.
pub fn min_output_dir(font_path: &Path) -> PathBuf {
    let stem = font_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = font_path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}-min", stem))
}

/// Turn a codepoint literal such as `\e600` or `\ue601` into its character.
///
/// Backslashes are removed and a leading `u` dropped; the leading run of hex
/// digits is the codepoint.
pub fn parse_codepoint(literal: &str) -> Option<char> {
    let cleaned: String = literal.chars().filter(|c| *c != '\\').collect();
    let digits = cleaned.strip_prefix('u').unwrap_or(&cleaned);
    let hex_len = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    if hex_len == 0 {
        return None;
    }
    u32::from_str_radix(&digits[..hex_len], 16)
        .ok()
        .and_then(char::from_u32)
}

/// Retained glyphs that the font has no mapping for.
pub fn missing_glyphs(
    font_data: &[u8],
    glyphs: &[(String, char)],
) -> Result<Vec<(String, char)>, ttf_parser::FaceParsingError> {
    let face = ttf_parser::Face::parse(font_data, 0)?;
    Ok(glyphs
        .iter()
        .filter(|(_, c)| face.glyph_index(*c).is_none())
        .cloned()
        .collect())
}

/// Subset the font, then write the pruned stylesheet next to it.
pub async fn emit<S: FontSubsetter>(
    subsetter: &S,
    plan: &EmitPlan,
    css_text: &str,
) -> Result<EmitOutcome> {
    if plan.is_empty() {
        return Ok(EmitOutcome::Skipped);
    }

    tokio::fs::create_dir_all(&plan.output_dir)
        .await
        .map_err(|source| SubsetError::OutputDir {
            path: plan.output_dir.clone(),
            source,
        })?;

    let request = SubsetRequest {
        font_path: plan.font_path.clone(),
        output_dir: plan.output_dir.clone(),
        text: plan.text(),
    };
    let font_path = subsetter.subset(&request).await?;

    tokio::fs::write(&plan.css_path, css_text)
        .await
        .with_context(|| format!("Failed to write {}", plan.css_path.display()))?;

    Ok(EmitOutcome::Written {
        font_path,
        css_path: plan.css_path.clone(),
    })
}
