//! Template selection and phrase generation on top of the expander.

use bon::Builder;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::expander::{ExpandError, Expander};
use crate::types::Dataset;

/// Generates finished phrases from a [`Dataset`].
///
/// # Example
///
/// ```
/// use phrasegen::{Dataset, Generator};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let dataset = Dataset::from_json_str(r#"{
///     "templates": ["The [thing]  [place]"],
///     "assets": { "thing": ["old mill"], "place": ["in the moor"] }
/// }"#).unwrap();
///
/// let generator = Generator::builder()
///     .dataset(&dataset)
///     .collapse_spaces(true)
///     .build();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// assert_eq!(generator.generate(&mut rng).unwrap(), "The old mill in the moor");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Generator<'d> {
    dataset: &'d Dataset,

    #[builder(default)]
    expander: Expander,

    /// Replace runs of two or more spaces in the output with one space.
    #[builder(default)]
    collapse_spaces: bool,
}

impl<'d> Generator<'d> {
    /// Create a generator with a default expander.
    pub fn new(dataset: &'d Dataset) -> Self {
        Generator::builder().dataset(dataset).build()
    }

    /// Pick a template uniformly at random and expand it.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ExpandError> {
        let template = self
            .dataset
            .templates
            .choose(rng)
            .ok_or(ExpandError::NoTemplates)?;
        self.generate_from(template, rng)
    }

    /// Expand the template at `index` in the dataset.
    pub fn generate_indexed<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<String, ExpandError> {
        let template =
            self.dataset
                .templates
                .get(index)
                .ok_or(ExpandError::TemplateIndexOutOfRange {
                    index,
                    count: self.dataset.templates.len(),
                })?;
        self.generate_from(template, rng)
    }

    /// Expand a caller-supplied template against the dataset's assets.
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        template: &str,
        rng: &mut R,
    ) -> Result<String, ExpandError> {
        debug!("generating from template {template:?}");
        let phrase = self.expander.expand(template, &self.dataset.assets, rng)?;
        if self.collapse_spaces {
            Ok(collapse_spaces(&phrase))
        } else {
            Ok(phrase)
        }
    }

    /// Generate `count` phrases, each from an independently chosen template.
    ///
    /// Stops at the first failure.
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, ExpandError> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generate `count` phrases from the template at `index`.
    pub fn generate_many_indexed<R: Rng + ?Sized>(
        &self,
        index: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, ExpandError> {
        (0..count)
            .map(|_| self.generate_indexed(index, rng))
            .collect()
    }
}

/// Replace every run of two or more spaces with a single space.
///
/// Only the space character is affected; tabs and newlines are kept.
pub fn collapse_spaces(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_space {
                output.push(c);
            }
            previous_space = true;
        } else {
            output.push(c);
            previous_space = false;
        }
    }
    output
}
