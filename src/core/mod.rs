//! Core purge engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: walk the entry directories (`file_scanner`), parse every
//!    JSX/TSX file (`parsers::jsx`) and extract the classes its `className`
//!    attributes can produce (`extract`).
//! 2. **Index**: parse the icon stylesheet (`parsers::css`) and map each used
//!    glyph class to its codepoint (`stylesheet`).
//! 3. **Reconcile**: intersect both and build the pruned stylesheet (`reconcile`).
//! 4. **Emit**: subset the font (`subset`), then write the stylesheet (`emit`).
//!
//! `context::PurgeContext` drives the phases for one project.

pub mod context;
pub mod data;
pub mod emit;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod reconcile;
pub mod stylesheet;
pub mod subset;

pub use context::{PurgeAnalysis, PurgeContext, ScanReport};
pub use data::{SourceContext, SourceLocation};
pub use emit::{EmitOutcome, EmitPlan};
pub use reconcile::RetainedSet;
pub use stylesheet::{CodepointLiteral, StylesheetEntry, StylesheetIndex};
pub use subset::{CommandSubsetter, FontSubsetter, SubsetRequest};
