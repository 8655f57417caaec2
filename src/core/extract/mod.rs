//! Class usage extraction: from a parsed JSX/TSX module to the set of class
//! names it references.
//!
//! - `name_part`: template literal decomposition (`DynamicNamePart`)
//! - `resolver`: static evaluation of class expressions (`ExpressionResolver`)
//! - `class_usage`: AST walk over `className` attributes (`ClassUsageExtractor`)

pub mod class_usage;
pub mod name_part;
pub mod resolver;


pub use class_usage::{
    CLASS_NAME_ATTR, ClassUsageExtractor, FileClassUsage, extract_file_classes,
};
pub use name_part::DynamicNamePart;
pub use resolver::{ExpressionResolver, ResolvedValue};
