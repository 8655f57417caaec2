//! Static evaluation of `className` expressions.
//!
//! Only a closed set of expression shapes is understood:
//!
//! ```ignore
//! "icon icon-home"                      → ["icon", "icon-home"]
//! on ? "icon-on" : "icon-off"           → ["icon-on", "icon-off"]   (both branches)
//! `icon-${on ? "a" : "b"}`              → ["icon-a", "icon-b"]
//! cx("icon", { "icon-spin": busy })     → ["icon", "icon-spin"]     (keys never evaluated)
//! `icon-${name}`                        → []                        (ResolutionGap)
//! ```
//!
//! Anything else resolves to nothing and leaves a [`ResolutionGap`] behind.
//! Over-approximating is fine (a few extra glyphs survive); silently guessing
//! is not.

use swc_common::{SourceMap, Span, Spanned};
use swc_ecma_ast::{
    BinaryOp, CallExpr, Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread, Str, Tpl,
};

use super::name_part::{DynamicNamePart, template_parts};
use crate::core::{SourceContext, SourceLocation};
use crate::issues::{GapReason, ResolutionGap};
use crate::utils::class_tokens;

/// Candidate class names an expression can statically yield.
pub type ResolvedValue = Vec<String>;

/// Strip wrappers that do not change the runtime value.
pub fn unwrap_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_expr(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_expr(&ts_sat.expr),
        Expr::TsNonNull(non_null) => unwrap_expr(&non_null.expr),
        Expr::TsTypeAssertion(assertion) => unwrap_expr(&assertion.expr),
        _ => expr,
    }
}

/// Human-readable kind of an expression, for diagnostics.
fn describe_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => return format!("identifier `{}`", ident.sym),
        Expr::Bin(bin)
            if matches!(
                bin.op,
                BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
            ) =>
        {
            return format!("logical `{}` expression", bin.op);
        }
        _ => {}
    }

    match expr {
        Expr::Array(_) => "array literal",
        Expr::Arrow(_) | Expr::Fn(_) => "function",
        Expr::Assign(_) => "assignment",
        Expr::Await(_) => "await expression",
        Expr::Bin(_) => "binary expression",
        Expr::Call(_) => "call expression",
        Expr::Class(_) => "class expression",
        Expr::Cond(_) => "conditional expression",
        Expr::Lit(Lit::Str(_)) => "string literal",
        Expr::Lit(Lit::Num(_)) => "number literal",
        Expr::Lit(_) => "literal",
        Expr::Member(_) | Expr::SuperProp(_) => "member expression",
        Expr::New(_) => "new expression",
        Expr::Object(_) => "object literal",
        Expr::OptChain(_) => "optional chain",
        Expr::Seq(_) => "sequence expression",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Tpl(_) => "template literal",
        Expr::This(_) => "`this`",
        Expr::Unary(_) => "unary expression",
        Expr::Update(_) => "update expression",
        Expr::Yield(_) => "yield expression",
        Expr::JSXElement(_) | Expr::JSXFragment(_) => "JSX element",
        _ => "expression",
    }
    .to_string()
}

/// Resolves class expressions of one file, collecting gaps as it goes.
pub struct ExpressionResolver<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    gaps: Vec<ResolutionGap>,
}

impl<'a> ExpressionResolver<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
            gaps: Vec::new(),
        }
    }

    /// Resolve a full `className={...}` expression.
    pub fn resolve(&mut self, expr: &Expr) -> ResolvedValue {
        match unwrap_expr(expr) {
            Expr::Lit(Lit::Str(s)) => str_tokens(s),
            Expr::Cond(cond) => {
                let mut values = self.resolve(&cond.cons);
                values.extend(self.resolve(&cond.alt));
                values
            }
            Expr::Tpl(tpl) => self.resolve_template(tpl),
            Expr::Call(call) => self.resolve_call(call),
            other => {
                self.record_gap(other, GapReason::Expression);
                Vec::new()
            }
        }
    }

    /// Resolve a template literal slot by slot.
    ///
    /// Static tokens that are not glued to a slot are classes on their own.
    /// A slot resolves through literals and conditionals only; its values get
    /// the slot's inferred prefix (if any) before being split into tokens.
    pub fn resolve_template(&mut self, tpl: &Tpl) -> ResolvedValue {
        let parts = template_parts(tpl);
        let mut values = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            match part {
                DynamicNamePart::Static(text) => {
                    values.extend(free_static_tokens(text, i > 0, i + 1 < parts.len()));
                }
                DynamicNamePart::Expression {
                    expr,
                    inferred_prefix,
                } => {
                    let prefix = inferred_prefix.as_deref().unwrap_or_default();
                    for candidate in self.resolve_slot(expr, prefix) {
                        values.extend(class_tokens(&candidate).map(String::from));
                    }
                }
            }
        }

        values
    }

    /// Resolve one argument list of a classnames-style helper call.
    ///
    /// Object keys are all kept: whether their values are truthy is a runtime
    /// question.
    pub fn resolve_call(&mut self, call: &CallExpr) -> ResolvedValue {
        let mut values = Vec::new();

        for arg in &call.args {
            if let Some(spread) = arg.spread {
                self.push_gap(spread, "spread argument".to_string(), GapReason::HelperArgument);
                continue;
            }
            match unwrap_expr(&arg.expr) {
                Expr::Lit(Lit::Str(s)) => values.extend(str_tokens(s)),
                Expr::Object(object) => values.extend(self.object_keys(object)),
                Expr::Tpl(tpl) => values.extend(self.resolve_template(tpl)),
                other => self.record_gap(other, GapReason::HelperArgument),
            }
        }

        values
    }

    pub fn into_gaps(self) -> Vec<ResolutionGap> {
        self.gaps
    }

    fn resolve_slot(&mut self, expr: &Expr, prefix: &str) -> ResolvedValue {
        match unwrap_expr(expr) {
            Expr::Lit(Lit::Str(s)) => vec![format!("{}{}", prefix, s.value.to_string_lossy())],
            Expr::Cond(cond) => {
                let mut values = self.resolve_slot(&cond.cons, prefix);
                values.extend(self.resolve_slot(&cond.alt, prefix));
                values
            }
            other => {
                self.record_gap(other, GapReason::TemplateSlot);
                Vec::new()
            }
        }
    }

    fn object_keys(&mut self, object: &ObjectLit) -> ResolvedValue {
        let mut values = Vec::new();
        for prop in &object.props {
            let PropOrSpread::Prop(prop) = prop else {
                continue;
            };
            let Prop::KeyValue(kv) = &**prop else {
                continue;
            };
            match &kv.key {
                PropName::Str(s) => values.extend(str_tokens(s)),
                PropName::Computed(computed) => {
                    self.record_gap(&computed.expr, GapReason::HelperArgument)
                }
                _ => {}
            }
        }
        values
    }

    fn record_gap(&mut self, expr: &Expr, reason: GapReason) {
        self.push_gap(expr.span(), describe_expr(expr), reason);
    }

    fn push_gap(&mut self, span: Span, expression: String, reason: GapReason) {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        self.gaps.push(ResolutionGap {
            context: SourceContext::new(
                SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
                source_line,
            ),
            reason,
            expression,
        });
    }
}

fn str_tokens(s: &Str) -> ResolvedValue {
    class_tokens(&s.value.to_string_lossy())
        .map(String::from)
        .collect()
}

/// Whitespace-separated tokens of a static template segment that stand on
/// their own. A token touching a neighbouring `${}` slot is part of a
/// dynamic name and is left to the slot.
fn free_static_tokens(text: &str, after_slot: bool, before_slot: bool) -> Vec<String> {
    let mut tokens: Vec<&str> = class_tokens(text).collect();
    if before_slot && !text.ends_with(char::is_whitespace) {
        tokens.pop();
    }
    if after_slot && !text.starts_with(char::is_whitespace) && !tokens.is_empty() {
        tokens.remove(0);
    }
    tokens.into_iter().map(String::from).collect()
}
