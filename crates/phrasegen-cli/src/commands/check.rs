//! Implementation of the `phrasegen check` command.

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};
use phrasegen::{lint_dataset, Dataset, DatasetWarning, Expander, Severity};
use serde::Serialize;

use super::{load_error_code, report_load_error};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Dataset files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Fail on warnings (cycles, unused placeholders) as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Read [name?] and [name?NN] as optional markers
    #[arg(long)]
    pub optional_markers: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    loaded: bool,
    findings: Vec<FindingJson>,
}

#[derive(Debug, Serialize)]
struct FindingJson {
    severity: &'static str,
    kind: &'static str,
    message: String,
}

impl From<&DatasetWarning> for FindingJson {
    fn from(warning: &DatasetWarning) -> Self {
        FindingJson {
            severity: severity_label(warning.severity()),
            kind: warning.kind(),
            message: warning.to_string(),
        }
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let expander = Expander::builder()
        .optional_markers(args.optional_markers)
        .build();
    let mut exit_code = exitcode::OK;
    let mut reports = Vec::new();

    for path in &args.files {
        let dataset = match Dataset::load(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                let code = if args.json {
                    eprintln!("{err}");
                    load_error_code(&err)
                } else {
                    report_load_error(path, &err)
                };
                if exit_code == exitcode::OK {
                    exit_code = code;
                }
                reports.push(FileReport {
                    file: path.display().to_string(),
                    loaded: false,
                    findings: Vec::new(),
                });
                continue;
            }
        };

        let warnings = lint_dataset(&dataset, &expander);
        let failing = warnings
            .iter()
            .any(|w| args.strict || w.severity() == Severity::Error);
        if failing && exit_code == exitcode::OK {
            exit_code = exitcode::DATAERR;
        }

        if !args.json {
            print_file_findings(path, &warnings);
        }
        reports.push(FileReport {
            file: path.display().to_string(),
            loaded: true,
            findings: warnings.iter().map(FindingJson::from).collect(),
        });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    }

    Ok(exit_code)
}

fn print_file_findings(path: &Path, warnings: &[DatasetWarning]) {
    if warnings.is_empty() {
        println!(
            "{}: {}",
            path.display(),
            "ok".if_supports_color(Stream::Stdout, |t| t.green())
        );
        return;
    }

    let errors = warnings
        .iter()
        .filter(|w| w.severity() == Severity::Error)
        .count();
    println!(
        "{}: {} error(s), {} warning(s)",
        path.display(),
        errors,
        warnings.len() - errors
    );
    for warning in warnings {
        let label = format!("{}[{}]", severity_label(warning.severity()), warning.kind());
        match warning.severity() {
            Severity::Error => println!(
                "  {}: {}",
                label.if_supports_color(Stream::Stdout, |t| t.red()),
                warning
            ),
            Severity::Warning => println!(
                "  {}: {}",
                label.if_supports_color(Stream::Stdout, |t| t.yellow()),
                warning
            ),
        }
    }
}
