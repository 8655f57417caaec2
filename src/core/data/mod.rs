//! Core data types shared by the scan and the reporting layer.

pub mod source;

pub use source::{SourceContext, SourceLocation};
