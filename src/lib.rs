//! icon-purge - shrink an icon font to the glyphs a React codebase uses
//!
//! icon-purge scans JSX/TSX sources for `className` attributes, resolves the
//! class names they can statically produce (string literals, conditionals,
//! template literals and classnames-style helper calls), matches them against
//! the `.name:before { content: "\e600" }` rules of an icon-font stylesheet,
//! and writes a subset font plus a pruned stylesheet.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Scan, index, reconcile and emit pipeline
//! - `error`: Fatal and per-file error types
//! - `issues`: Non-fatal findings (resolution gaps, skipped files)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod utils;
