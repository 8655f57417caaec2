//! Reconciliation of used classes against the glyph index, and the pruned
//! stylesheet built from the result.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::parsers::css::Stylesheet;
use crate::core::stylesheet::{CodepointLiteral, StylesheetIndex};

/// Classes that keep their glyph, with the glyph's codepoint literal.
pub type RetainedSet = BTreeMap<String, CodepointLiteral>;

/// First line of every emitted stylesheet.
pub const BANNER: &str = "/* Auto-generated minified iconfont */";

/// Restrict `index` to the classes in `used_classes`.
pub fn reconcile(used_classes: &BTreeSet<String>, index: &StylesheetIndex) -> RetainedSet {
    index
        .iter()
        .filter(|entry| used_classes.contains(&entry.class_name))
        .map(|entry| (entry.class_name.clone(), entry.codepoint.clone()))
        .collect()
}

/// Build the pruned stylesheet text.
///
/// The header holds every `@font-face` block (at any depth) followed by the
/// rules whose selector is exactly `.{icon_prefix}`. The body holds every
/// other rule with a selector containing `.{class}` for some retained class.
/// Rules nested in other at-rules are emitted without their wrapper.
pub fn pruned_css(mut stylesheet: Stylesheet, retained: &RetainedSet, icon_prefix: &str) -> String {
    let mut header = String::new();
    for font_face in stylesheet.take_at_rules("font-face") {
        header.push_str(font_face.raw());
        header.push('\n');
    }

    let base_selector = format!(".{}", icon_prefix);
    let rules = stylesheet.rules();
    for rule in rules.iter().filter(|r| r.selector == base_selector) {
        header.push_str(rule.raw());
        header.push('\n');
    }

    let needles: Vec<String> = retained.keys().map(|class| format!(".{}", class)).collect();
    let body = rules.iter().filter(|rule| {
        rule.selectors()
            .iter()
            .any(|selector| needles.iter().any(|needle| selector.contains(needle.as_str())))
    });

    let mut sections = vec![BANNER, header.trim()];
    sections.extend(body.map(|rule| rule.raw()));
    sections.join("\n\n")
}
