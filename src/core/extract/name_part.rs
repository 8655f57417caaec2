//! Template literal decomposition.
//!
//! A template literal such as `` `icon icon-${active ? "on" : "off"}` `` is
//! split into alternating static text and `${}` slots. A slot remembers the
//! class-name prefix glued to it (`icon-` here) so its resolved values can be
//! rebuilt into full class names.

use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{Expr, Tpl, TplElement};

/// Trailing static text that looks like the start of a class name: a token
/// ending in `-` with nothing between it and the slot.
static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+-$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum DynamicNamePart<'a> {
    Static(String),
    Expression {
        expr: &'a Expr,
        inferred_prefix: Option<String>,
    },
}

/// Split a template literal into its static segments and expression slots,
/// in source order. The result always starts and ends with a `Static` part.
pub fn template_parts(tpl: &Tpl) -> Vec<DynamicNamePart<'_>> {
    let mut parts = Vec::with_capacity(tpl.quasis.len() + tpl.exprs.len());

    for (i, quasi) in tpl.quasis.iter().enumerate() {
        let text = quasi_text(quasi);
        let inferred_prefix = infer_prefix(&text);
        parts.push(DynamicNamePart::Static(text));

        if let Some(expr) = tpl.exprs.get(i) {
            parts.push(DynamicNamePart::Expression {
                expr,
                inferred_prefix,
            });
        }
    }

    parts
}

/// The class-name prefix at the end of `text`, if any.
///
/// ```
/// use icon_purge::core::extract::name_part::infer_prefix;
///
/// assert_eq!(infer_prefix("icon icon-").as_deref(), Some("icon-"));
/// assert_eq!(infer_prefix("icon "), None);
/// assert_eq!(infer_prefix("btn"), None);
/// ```
pub fn infer_prefix(text: &str) -> Option<String> {
    PREFIX_PATTERN.find(text).map(|m| m.as_str().to_string())
}

fn quasi_text(quasi: &TplElement) -> String {
    match quasi.cooked.as_ref() {
        Some(cooked) => cooked.to_string_lossy().to_string(),
        None => quasi.raw.to_string(),
    }
}
