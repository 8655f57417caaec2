//! Minimal CSS tree for icon-font stylesheets.
//!
//! The stylesheet is tokenized with `cssparser` and folded into rules,
//! at-rules and declarations. Every rule and at-rule keeps its exact source
//! text so it can be re-emitted unchanged into the pruned stylesheet.

use cssparser::{
    BasicParseErrorKind, Delimiter, ParseError as CssParseError, ParseErrorKind, Parser,
    ParserInput, ToCss, Token,
};

use crate::error::CssSyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    /// Raw value text without `!important`, e.g. `"\e600"`.
    pub value: String,
    pub important: bool,
}

/// A qualified rule: `selector { declarations }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// Selector text exactly as written, trimmed.
    pub selector: String,
    pub declarations: Vec<Declaration>,
    /// 1-based line of the selector.
    pub line: usize,
    raw: String,
}

impl CssRule {
    /// Comma-separated selectors, split at the top nesting level.
    pub fn selectors(&self) -> Vec<&str> {
        split_selector_list(&self.selector)
    }

    /// Declarations with the given property name, in source order.
    pub fn declarations_named<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.declarations
            .iter()
            .filter(move |d| d.property.eq_ignore_ascii_case(property))
    }

    /// Source text from the first selector character to the closing brace.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// An at-rule, with or without a block: `@font-face { ... }`, `@media x { ... }`, `@import "a";`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssAtRule {
    pub name: String,
    pub params: String,
    pub declarations: Vec<Declaration>,
    pub children: Vec<CssNode>,
    pub line: usize,
    raw: String,
}

impl CssAtRule {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssNode {
    Rule(CssRule),
    AtRule(CssAtRule),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<CssNode>,
}

impl Stylesheet {
    /// Parse a whole stylesheet. A leading byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated string or url, or on a closing bracket
    /// that closes nothing.
    pub fn parse(css: &str) -> Result<Self, CssSyntaxError> {
        let css = css.strip_prefix('\u{feff}').unwrap_or(css);
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let items = parse_block_items(&mut parser).map_err(syntax_error)?;
        Ok(Self { nodes: items.nodes })
    }

    /// Every qualified rule, depth-first in document order (rules nested in
    /// at-rules such as `@media` included).
    pub fn rules(&self) -> Vec<&CssRule> {
        let mut out = Vec::new();
        collect_rules(&self.nodes, &mut out);
        out
    }

    /// Remove every at-rule named `name` (at any depth) and return them in
    /// document order.
    pub fn take_at_rules(&mut self, name: &str) -> Vec<CssAtRule> {
        let mut taken = Vec::new();
        take_at_rules_from(&mut self.nodes, name, &mut taken);
        taken
    }
}

fn collect_rules<'a>(nodes: &'a [CssNode], out: &mut Vec<&'a CssRule>) {
    for node in nodes {
        match node {
            CssNode::Rule(rule) => out.push(rule),
            CssNode::AtRule(at_rule) => collect_rules(&at_rule.children, out),
        }
    }
}

fn take_at_rules_from(nodes: &mut Vec<CssNode>, name: &str, taken: &mut Vec<CssAtRule>) {
    let mut kept = Vec::with_capacity(nodes.len());
    for node in std::mem::take(nodes) {
        match node {
            CssNode::AtRule(at_rule) if at_rule.name.eq_ignore_ascii_case(name) => {
                taken.push(at_rule)
            }
            CssNode::AtRule(mut at_rule) => {
                take_at_rules_from(&mut at_rule.children, name, taken);
                kept.push(CssNode::AtRule(at_rule));
            }
            rule => kept.push(rule),
        }
    }
    *nodes = kept;
}

#[derive(Default)]
struct BlockItems {
    declarations: Vec<Declaration>,
    nodes: Vec<CssNode>,
}

fn syntax_error(err: CssParseError<'_, ()>) -> CssSyntaxError {
    let message = match &err.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected `{}`", token.to_css_string())
        }
        kind => format!("{:?}", kind),
    };
    CssSyntaxError {
        line: err.location.line as usize + 1,
        col: err.location.column as usize,
        message,
    }
}

/// Skip to the end of the current delimited input, rejecting tokens that
/// make the rest of the document unreliable.
fn consume_rest<'i>(parser: &mut Parser<'i, '_>) -> Result<(), CssParseError<'i, ()>> {
    loop {
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        if matches!(
            token,
            Token::BadString(_)
                | Token::BadUrl(_)
                | Token::CloseCurlyBracket
                | Token::CloseParenthesis
                | Token::CloseSquareBracket
        ) {
            return Err(location.new_unexpected_token_error(token));
        }
    }
}

fn skip_trivia(parser: &mut Parser<'_, '_>) {
    loop {
        let state = parser.state();
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::WhiteSpace(_)) | Ok(Token::Comment(_)) => continue,
            _ => {
                parser.reset(&state);
                break;
            }
        }
    }
}

/// Parse the contents of a stylesheet or a `{}` block into declarations and
/// nested rules.
fn parse_block_items<'i>(parser: &mut Parser<'i, '_>) -> Result<BlockItems, CssParseError<'i, ()>> {
    let mut items = BlockItems::default();

    loop {
        skip_trivia(parser);
        if parser.is_exhausted() {
            break;
        }

        let start = parser.position();
        let line = parser.current_source_location().line as usize + 1;
        parser.parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
            consume_rest(p)
        })?;
        let prelude = parser.slice_from(start).trim().to_string();

        let has_block = matches!(parser.next(), Ok(Token::CurlyBracketBlock));
        if has_block {
            let inner = parser.parse_nested_block(|p| parse_block_items(p))?;
            let raw = parser.slice_from(start).to_string();
            items
                .nodes
                .push(block_node(prelude, inner, raw.trim_end().to_string(), line));
            continue;
        }

        let raw = parser.slice_from(start).trim_end().to_string();
        if let Some(at_rule) = prelude.strip_prefix('@') {
            let (name, params) = split_at_rule_prelude(at_rule);
            items.nodes.push(CssNode::AtRule(CssAtRule {
                name,
                params,
                declarations: Vec::new(),
                children: Vec::new(),
                line,
                raw,
            }));
        } else if let Some(declaration) = parse_declaration(&prelude) {
            items.declarations.push(declaration);
        }
    }

    Ok(items)
}

fn block_node(prelude: String, inner: BlockItems, raw: String, line: usize) -> CssNode {
    match prelude.strip_prefix('@') {
        Some(at_rule) => {
            let (name, params) = split_at_rule_prelude(at_rule);
            CssNode::AtRule(CssAtRule {
                name,
                params,
                declarations: inner.declarations,
                children: inner.nodes,
                line,
                raw,
            })
        }
        None => CssNode::Rule(CssRule {
            selector: prelude,
            declarations: inner.declarations,
            line,
            raw,
        }),
    }
}

fn split_at_rule_prelude(prelude: &str) -> (String, String) {
    let name_end = prelude
        .find(|c: char| c.is_whitespace() || c == '(' || c == '"' || c == '\'')
        .unwrap_or(prelude.len());
    (
        prelude[..name_end].to_string(),
        prelude[name_end..].trim().to_string(),
    )
}

fn parse_declaration(text: &str) -> Option<Declaration> {
    let (property, value) = text.split_once(':')?;
    let property = property.trim();
    if property.is_empty() {
        return None;
    }

    let mut value = value.trim();
    let mut important = false;
    if let Some(bang) = value.rfind('!')
        && value[bang + 1..].trim().eq_ignore_ascii_case("important")
    {
        value = value[..bang].trim_end();
        important = true;
    }

    Some(Declaration {
        property: property.to_string(),
        value: value.to_string(),
        important,
    })
}

/// Split a selector list on commas that are not nested in brackets or strings.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' if quote == Some(c) => quote = None,
            '"' | '\'' if quote.is_none() => quote = Some(c),
            _ if quote.is_some() => {}
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}
