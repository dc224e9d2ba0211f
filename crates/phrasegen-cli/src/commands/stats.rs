//! Implementation of the `phrasegen stats` command.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use phrasegen::parser::{has_markers, parse_template};
use phrasegen::{Dataset, Expander};
use serde::Serialize;

use super::load_dataset;
use crate::output::table::{format_stats_table, PlaceholderStats};

/// Arguments for the stats command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Dataset file (JSON with "templates" and "assets")
    #[arg(short, long, env = "PHRASEGEN_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Count [name?] and [name?NN] as references to `name`
    #[arg(long)]
    pub optional_markers: bool,
}

/// JSON output format for dataset statistics.
#[derive(Debug, Serialize)]
struct StatsJson {
    templates: usize,
    placeholders: Vec<PlaceholderStats>,
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs) -> Result<i32> {
    let dataset = match load_dataset(&args.data) {
        Ok(dataset) => dataset,
        Err(code) => return Ok(code),
    };

    let expander = Expander::builder()
        .optional_markers(args.optional_markers)
        .build();
    let placeholders = collect_stats(&dataset, &expander);

    if args.json {
        let json_data = StatsJson {
            templates: dataset.templates.len(),
            placeholders,
        };
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!(
            "{} template(s), {} placeholder(s)",
            dataset.templates.len(),
            placeholders.len()
        );
        if !placeholders.is_empty() {
            println!("{}", format_stats_table(&placeholders));
        }
    }

    Ok(exitcode::OK)
}

fn collect_stats(dataset: &Dataset, expander: &Expander) -> Vec<PlaceholderStats> {
    dataset
        .assets
        .iter()
        .map(|(name, candidates)| {
            let references: BTreeSet<String> = candidates
                .iter()
                .flat_map(|c| {
                    parse_template(c)
                        .markers()
                        .map(|m| expander.marker_key(m).to_string())
                        .collect::<Vec<_>>()
                })
                .collect();
            PlaceholderStats {
                name: name.clone(),
                candidates: candidates.len(),
                nested: candidates.iter().filter(|c| has_markers(c)).count(),
                references: references.into_iter().collect(),
            }
        })
        .collect()
}
