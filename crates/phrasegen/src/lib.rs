pub mod expander;
pub mod parser;
pub mod types;

pub use expander::{
    DEFAULT_MAX_DEPTH, DatasetWarning, ExpandError, Expander, Generator, LoadError,
    MAX_SUPPORTED_DEPTH, Origin, Severity, collapse_spaces, compute_suggestions, expand,
    lint_dataset,
};
pub use types::{AssetStore, Dataset};
