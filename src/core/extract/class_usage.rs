//! Per-file `className` extraction.
//!
//! Every `className` attribute anywhere in the module is considered reachable:
//! there is no control-flow or dead-code analysis. Each file produces its own
//! [`FileClassUsage`]; merging into the run-wide set happens in the caller.

use std::collections::BTreeSet;

use swc_common::SourceMap;
use swc_ecma_ast::{JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, Module};
use swc_ecma_visit::{Visit, VisitWith};

use super::resolver::ExpressionResolver;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::error::ParseError;
use crate::issues::ResolutionGap;
use crate::utils::class_tokens;

pub const CLASS_NAME_ATTR: &str = "className";

/// Classes referenced by one file, plus the expressions that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileClassUsage {
    pub classes: BTreeSet<String>,
    pub gaps: Vec<ResolutionGap>,
}

pub struct ClassUsageExtractor<'a> {
    resolver: ExpressionResolver<'a>,
    classes: BTreeSet<String>,
}

impl<'a> ClassUsageExtractor<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            resolver: ExpressionResolver::new(file_path, source_map),
            classes: BTreeSet::new(),
        }
    }

    pub fn extract(mut self, module: &Module) -> FileClassUsage {
        self.visit_module(module);
        FileClassUsage {
            classes: self.classes,
            gaps: self.resolver.into_gaps(),
        }
    }

    fn record_value(&mut self, value: &JSXAttrValue) {
        match value {
            JSXAttrValue::Str(s) => {
                let value = s.value.to_string_lossy();
                self.classes
                    .extend(class_tokens(&value).map(String::from));
            }
            JSXAttrValue::JSXExprContainer(container) => {
                if let JSXExpr::Expr(expr) = &container.expr {
                    self.classes.extend(self.resolver.resolve(expr));
                }
            }
            _ => {}
        }
    }
}

impl Visit for ClassUsageExtractor<'_> {
    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        if let JSXAttrName::Ident(ident) = &node.name
            && ident.sym.as_str() == CLASS_NAME_ATTR
            && let Some(value) = &node.value
        {
            self.record_value(value);
        }

        // Attribute values can hold JSX with their own className attributes.
        node.visit_children_with(self);
    }
}

/// Parse one source file and extract its class usage.
pub fn extract_file_classes(code: String, file_path: &str) -> Result<FileClassUsage, ParseError> {
    let parsed = parse_jsx_source(code, file_path)?;
    Ok(ClassUsageExtractor::new(file_path, &parsed.source_map).extract(&parsed.module))
}
