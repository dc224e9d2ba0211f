//! Expansion options shared by `generate` and `expand`.

use clap::ValueEnum;
use log::debug;
use phrasegen::{Expander, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Settings that control how markers are expanded.
#[derive(Debug, clap::Args)]
pub struct ExpandOptions {
    /// Seed for reproducible output
    #[arg(long, env = "PHRASEGEN_SEED")]
    pub seed: Option<u64>,

    /// Prefer candidates containing this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum nesting of expanded candidates
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_SUPPORTED_DEPTH as i64)
    )]
    pub max_depth: u16,

    /// Treat [name?] and [name?NN] as optional markers
    #[arg(long)]
    pub optional_markers: bool,
}

impl ExpandOptions {
    pub fn expander(&self) -> Expander {
        Expander::builder()
            .max_depth(usize::from(self.max_depth))
            .optional_markers(self.optional_markers)
            .maybe_search(self.search.clone())
            .build()
    }

    /// Seeded generator when `--seed` is given, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("using seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}

/// Output format for generated phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One phrase per line
    Text,
    /// A JSON object with a "phrases" array
    Json,
}
