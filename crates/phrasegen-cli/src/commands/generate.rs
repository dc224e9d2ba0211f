//! Implementation of the `phrasegen generate` command.

use std::path::PathBuf;

use phrasegen::Generator;
use serde::Serialize;

use super::load_dataset;
use super::options::{ExpandOptions, OutputFormat};

/// Arguments for the generate command.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Dataset file (JSON with "templates" and "assets")
    #[arg(short, long, env = "PHRASEGEN_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Number of phrases to generate
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Always start from the template at this position (0-based)
    #[arg(long)]
    pub template: Option<usize>,

    /// Replace runs of spaces in the output with a single space
    #[arg(long)]
    pub collapse_spaces: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub options: ExpandOptions,
}

/// JSON output for generated phrases.
#[derive(Serialize)]
pub struct GenerateResult {
    pub phrases: Vec<String>,
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> miette::Result<i32> {
    let dataset = match load_dataset(&args.data) {
        Ok(dataset) => dataset,
        Err(code) => return Ok(code),
    };

    let generator = Generator::builder()
        .dataset(&dataset)
        .expander(args.options.expander())
        .collapse_spaces(args.collapse_spaces)
        .build();
    let mut rng = args.options.rng();
    let count = args.count as usize;

    let result = match args.template {
        Some(index) => generator.generate_many_indexed(index, count, &mut rng),
        None => generator.generate_many(count, &mut rng),
    };

    match result {
        Ok(phrases) => {
            match args.format {
                OutputFormat::Text => {
                    for phrase in &phrases {
                        println!("{}", phrase);
                    }
                }
                OutputFormat::Json => {
                    let output = GenerateResult { phrases };
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output)
                            .expect("JSON serialization should not fail")
                    );
                }
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.format == OutputFormat::Json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Generation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
