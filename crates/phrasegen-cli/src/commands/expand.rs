//! Implementation of the `phrasegen expand` command.

use std::path::PathBuf;

use phrasegen::Expander;
use serde::Serialize;

use super::load_dataset;
use super::options::ExpandOptions;

/// Arguments for the expand command.
#[derive(Debug, clap::Args)]
pub struct ExpandArgs {
    /// Dataset file (JSON with "templates" and "assets")
    #[arg(short, long, env = "PHRASEGEN_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Template string to expand
    #[arg(long, required = true)]
    pub template: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub options: ExpandOptions,
}

/// JSON output for expand results.
#[derive(Serialize)]
pub struct ExpandResult {
    pub result: String,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> miette::Result<i32> {
    let dataset = match load_dataset(&args.data) {
        Ok(dataset) => dataset,
        Err(code) => return Ok(code),
    };

    let expander: Expander = args.options.expander();
    let mut rng = args.options.rng();

    match expander.expand(&args.template, &dataset.assets, &mut rng) {
        Ok(result) => {
            if args.json {
                let output = ExpandResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Expansion error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
