use swc_common::{FileName, Globals, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::error::ParseError;

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Lrc<SourceMap>,
}

/// Parse JSX/TSX source code string into an AST.
///
/// Both `.jsx` and `.tsx` files go through the TSX grammar so type
/// annotations are accepted everywhere. Failures carry the 1-based position
/// of the first syntax error.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX, ParseError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        match parser.parse_module() {
            Ok(module) => Ok(ParsedJSX { module, source_map }),
            Err(err) => {
                let loc = source_map.lookup_char_pos(err.span().lo);
                Err(ParseError {
                    file_path: file_path.to_string(),
                    line: loc.line,
                    col: loc.col_display + 1,
                    message: err.kind().msg().to_string(),
                })
            }
        }
    })
}
