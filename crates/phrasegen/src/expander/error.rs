//! Error types for dataset loading and phrase expansion.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the dataset.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON error with file location context.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// An error that aborted an expansion.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// A marker names a placeholder the asset store does not define.
    #[error("placeholder not found: '{name}'{}", format_suggestions(suggestions))]
    PlaceholderNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// A placeholder has an empty candidate list.
    #[error("placeholder '{name}' has no candidates to choose from")]
    EmptyChoice { name: String },

    /// Nested expansion went deeper than the configured limit.
    #[error("maximum expansion depth {max_depth} exceeded: {}", chain.join(" -> "))]
    MaxDepthExceeded { max_depth: usize, chain: Vec<String> },

    /// A template was requested but the dataset has none.
    #[error("dataset has no templates")]
    NoTemplates,

    /// A template was requested by a position the dataset does not have.
    #[error("template index {index} out of range, dataset has {count} templates")]
    TemplateIndexOutOfRange { index: usize, count: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three names within a small edit distance of `target`.
///
/// Short names (three characters or fewer) allow one edit, longer ones two.
/// Results are ordered by distance, then alphabetically.
pub fn compute_suggestions<'a>(
    target: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .filter(|name| *name != target)
        .map(|name| (levenshtein(target, name), name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// How serious a dataset lint finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expansion can fail at runtime.
    Error,
    /// Expansion works but the data is probably not what was intended.
    Warning,
}

/// Where a placeholder reference was found.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Origin {
    /// Template at this position in the dataset.
    Template(usize),
    /// A candidate of this placeholder.
    Asset(String),
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Origin::Template(index) => write!(f, "template #{index}"),
            Origin::Asset(name) => write!(f, "placeholder '{name}'"),
        }
    }
}

/// A finding from [`lint_dataset`](crate::lint_dataset).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetWarning {
    /// The dataset has nothing to start a phrase from.
    #[error("dataset has no templates")]
    NoTemplates,

    /// A marker names a placeholder the assets do not define.
    #[error("{origin} references unknown placeholder '{name}'{}", format_suggestions(suggestions))]
    UnknownPlaceholder {
        name: String,
        origin: Origin,
        suggestions: Vec<String>,
    },

    /// A placeholder that would fail with an empty choice.
    #[error("placeholder '{name}' has no candidates")]
    EmptyCandidates { name: String },

    /// Placeholders that can reach themselves through their candidates.
    #[error("placeholders form a cycle: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    /// A placeholder no template or other placeholder refers to.
    #[error("placeholder '{name}' is never referenced")]
    UnusedAsset { name: String },
}

impl DatasetWarning {
    pub fn severity(&self) -> Severity {
        match self {
            DatasetWarning::NoTemplates
            | DatasetWarning::UnknownPlaceholder { .. }
            | DatasetWarning::EmptyCandidates { .. } => Severity::Error,
            DatasetWarning::Cycle { .. } | DatasetWarning::UnusedAsset { .. } => {
                Severity::Warning
            }
        }
    }

    /// Short machine-readable name of the finding.
    pub fn kind(&self) -> &'static str {
        match self {
            DatasetWarning::NoTemplates => "no-templates",
            DatasetWarning::UnknownPlaceholder { .. } => "unknown-placeholder",
            DatasetWarning::EmptyCandidates { .. } => "empty-candidates",
            DatasetWarning::Cycle { .. } => "cycle",
            DatasetWarning::UnusedAsset { .. } => "unused-asset",
        }
    }
}
