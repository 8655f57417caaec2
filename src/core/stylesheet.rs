//! Icon glyph index: which used class maps to which codepoint.
//!
//! Only rules shaped like `.icon-home:before { content: "\e600"; }` count.
//! The index is driven by the used-class set; CSS rules for classes nobody
//! references never enter it.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::parsers::css::{CssRule, Stylesheet};

/// Escape sequence from a `content` declaration with its quotes removed, e.g. `\e600`.
pub type CodepointLiteral = String;

const GLYPH_PSEUDO: &str = ":before";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetEntry {
    pub class_name: String,
    pub codepoint: CodepointLiteral,
    /// Line of the rule that declared the glyph.
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetIndex {
    entries: BTreeMap<String, StylesheetEntry>,
}

impl StylesheetIndex {
    /// Index every glyph rule of `stylesheet` whose class is in `used_classes`.
    ///
    /// A rule qualifies for class `c` when one of its comma-separated
    /// selectors is exactly `.c:before`. A later qualifying rule overrides an
    /// earlier one, as it would in the browser.
    pub fn build(stylesheet: &Stylesheet, used_classes: &BTreeSet<String>) -> Self {
        let mut entries = BTreeMap::new();

        for rule in stylesheet.rules() {
            let classes: Vec<&str> = rule
                .selectors()
                .into_iter()
                .filter_map(glyph_class)
                .filter(|class| used_classes.contains(*class))
                .collect();
            if classes.is_empty() {
                continue;
            }

            let Some(codepoint) = glyph_codepoint(rule) else {
                continue;
            };

            for class in classes {
                entries.insert(
                    class.to_string(),
                    StylesheetEntry {
                        class_name: class.to_string(),
                        codepoint: codepoint.clone(),
                        line: rule.line,
                    },
                );
            }
        }

        Self { entries }
    }

    pub fn get(&self, class_name: &str) -> Option<&StylesheetEntry> {
        self.entries.get(class_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylesheetEntry> {
        self.entries.values()
    }
}

/// `icon-home` for the selector `.icon-home:before`.
fn glyph_class(selector: &str) -> Option<&str> {
    selector
        .strip_prefix('.')?
        .strip_suffix(GLYPH_PSEUDO)
        .filter(|class| !class.is_empty())
}

/// The last `content` value of `rule` that is a quoted escape sequence.
fn glyph_codepoint(rule: &CssRule) -> Option<CodepointLiteral> {
    rule.declarations_named("content")
        .filter_map(|decl| unquote_escape(&decl.value))
        .last()
}

fn unquote_escape(value: &str) -> Option<CodepointLiteral> {
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let inner = value[1..].strip_suffix(quote).unwrap_or(&value[1..]);
    inner.starts_with('\\').then(|| inner.to_string())
}
