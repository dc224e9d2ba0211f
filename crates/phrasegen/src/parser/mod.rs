//! Template scanner for phrasegen.
//!
//! Splits template and candidate strings into literal text and placeholder
//! markers. Scanning never fails: anything that is not a well-formed marker
//! is kept as literal text.

pub mod ast;
mod template;

pub use ast::*;
pub use template::{has_markers, parse_template};
