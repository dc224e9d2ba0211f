//! Phrase expansion engine.
//!
//! This module provides the recursive expander, the generator that picks
//! starting templates, and the static dataset lint. Randomness is always
//! passed in by the caller so seeded runs are reproducible.

mod context;
mod error;
mod expand;
mod generator;
mod lint;

pub(crate) use context::ExpandContext;
pub use error::{
    DatasetWarning, ExpandError, LoadError, Origin, Severity, compute_suggestions,
};
pub use expand::{DEFAULT_MAX_DEPTH, Expander, MAX_SUPPORTED_DEPTH, expand};
pub use generator::{Generator, collapse_spaces};
pub use lint::lint_dataset;
