//! Miette diagnostic for dataset files that are not valid JSON.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use phrasegen::LoadError;
use thiserror::Error;

/// Points at the byte where JSON parsing of a dataset stopped.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid dataset: {message}")]
#[diagnostic(
    code(phrasegen::dataset),
    help("a dataset is a JSON object with a \"templates\" array and an \"assets\" object")
)]
pub struct DatasetDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl DatasetDiagnostic {
    /// Build a diagnostic for `err`, which should be a `LoadError::Parse`.
    ///
    /// Other errors get a span at the start of the file.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (offset, message) = match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => (byte_offset(content, *line, *column), message.clone()),
            LoadError::Io { .. } => (0, err.to_string()),
        };
        let len = usize::from(offset < content.len());

        DatasetDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
        }
    }
}

/// Byte offset of a 1-based line and column as reported by serde_json.
///
/// serde_json reports column 0 when the error sits right after a newline;
/// both that and positions past the end clamp to a valid offset.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}
