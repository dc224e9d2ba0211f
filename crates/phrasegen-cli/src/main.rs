//! phrasegen CLI entry point.
//!
//! Provides command-line tools for phrase datasets:
//! - `phrasegen generate` - Generate phrases from a dataset's templates
//! - `phrasegen expand` - Expand a single template string
//! - `phrasegen check` - Lint dataset files
//! - `phrasegen stats` - Summarize a dataset's placeholders

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, ExpandArgs, GenerateArgs, StatsArgs, run_check, run_expand, run_generate,
    run_stats,
};
use log::LevelFilter;

/// Random phrase generator.
#[derive(Debug, Parser)]
#[command(name = "phrasegen")]
#[command(about = "Generate random phrases from JSON template datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate phrases from the dataset's templates
    Generate(GenerateArgs),
    /// Expand a template string against the dataset's assets
    Expand(ExpandArgs),
    /// Check dataset files for missing, empty, cyclic, or unused placeholders
    Check(CheckArgs),
    /// Show candidate counts per placeholder
    Stats(StatsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Expand(args) => run_expand(args),
        Commands::Check(args) => run_check(args),
        Commands::Stats(args) => run_stats(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
