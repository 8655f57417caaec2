//! File parsers for source code and stylesheets.
//!
//! - `css`: icon-font stylesheet parser (uses cssparser, keeps raw node text)
//! - `jsx`: JSX/TSX source file parser (uses swc for AST generation)

pub mod css;
pub mod jsx;
