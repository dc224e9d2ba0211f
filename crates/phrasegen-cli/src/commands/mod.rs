//! CLI command implementations.

mod check;
mod expand;
mod generate;
mod options;
mod stats;

pub use check::{CheckArgs, run_check};
pub use expand::{ExpandArgs, run_expand};
pub use generate::{GenerateArgs, run_generate};
pub use stats::{StatsArgs, run_stats};

use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use miette::Report;
use phrasegen::{Dataset, LoadError};

use crate::output::DatasetDiagnostic;

/// Load a dataset, printing a report and returning the exit code on failure.
pub(crate) fn load_dataset(path: &Path) -> Result<Dataset, i32> {
    match Dataset::load(path) {
        Ok(dataset) => Ok(dataset),
        Err(err) => {
            debug!("loading {} failed: {err:?}", path.display());
            Err(report_load_error(path, &err))
        }
    }
}

/// Exit code for a dataset that could not be loaded.
pub(crate) fn load_error_code(err: &LoadError) -> i32 {
    match err {
        LoadError::Io { .. } => exitcode::NOINPUT,
        LoadError::Parse { .. } => exitcode::DATAERR,
    }
}

/// Print a load error and map it to an exit code.
///
/// Parse errors are shown as a source snippet pointing at the bad JSON.
pub(crate) fn report_load_error(path: &Path, err: &LoadError) -> i32 {
    match err {
        LoadError::Io { .. } => eprintln!("Cannot read dataset: {err}"),
        LoadError::Parse { .. } => match read_to_string(path) {
            Ok(content) => {
                let diagnostic = DatasetDiagnostic::from_load_error(path, &content, err);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            Err(_) => eprintln!("Invalid dataset: {err}"),
        },
    }
    load_error_code(err)
}
