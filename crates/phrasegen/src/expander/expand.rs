//! Recursive placeholder expansion.
//!
//! Each marker in a phrase is replaced by one randomly chosen candidate of
//! its placeholder. A chosen candidate that itself contains markers is
//! expanded on its own before being spliced in; the text around it is never
//! re-scanned.

use bon::Builder;
use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::expander::error::compute_suggestions;
use crate::expander::{ExpandContext, ExpandError};
use crate::parser::{Marker, Segment, Template, has_markers, parse_template};
use crate::types::AssetStore;

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound on any configured nesting limit.
///
/// Expansion recurses once per nested candidate, so larger limits are
/// clamped to keep the guard ahead of the thread's stack.
pub const MAX_SUPPORTED_DEPTH: usize = 256;

/// Configured phrase expander.
///
/// # Example
///
/// ```
/// use phrasegen::{AssetStore, Expander};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let store = AssetStore::from_iter([
///     ("a", vec!["[b] end"]),
///     ("b", vec!["X"]),
/// ]);
/// let expander = Expander::builder().max_depth(8).build();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// assert_eq!(expander.expand("[a]", &store, &mut rng).unwrap(), "X end");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Expander {
    /// How many chosen candidates may be nested inside each other.
    ///
    /// Values above [`MAX_SUPPORTED_DEPTH`] are clamped to it.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Treat `[key?]` and `[key?NN]` as optional markers.
    ///
    /// Off by default, in which case the whole bracket text is the key.
    #[builder(default)]
    optional_markers: bool,

    /// Prefer candidates containing this text (case-insensitive).
    ///
    /// A pick falls back to the full candidate list when nothing matches.
    #[builder(into)]
    search: Option<String>,
}

impl Default for Expander {
    fn default() -> Self {
        Expander::builder().build()
    }
}

impl Expander {
    /// Create an expander with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth.min(MAX_SUPPORTED_DEPTH)
    }

    pub fn optional_markers(&self) -> bool {
        self.optional_markers
    }

    /// The effective search term, ignoring surrounding whitespace.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The asset key a marker refers to under this expander's settings.
    pub fn marker_key<'m>(&self, marker: &'m Marker) -> &'m str {
        match marker.as_optional() {
            Some(optional) if self.optional_markers => optional.key,
            _ => &marker.name,
        }
    }

    /// Expand every marker in `phrase` against `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A marker names a placeholder missing from the store
    /// - A placeholder has no candidates
    /// - Nested candidates go deeper than `max_depth`
    pub fn expand<R: Rng + ?Sized>(
        &self,
        phrase: &str,
        store: &AssetStore,
        rng: &mut R,
    ) -> Result<String, ExpandError> {
        let mut ctx = ExpandContext::new(self.max_depth());
        let template = parse_template(phrase);
        let output = self.expand_template(&template, store, rng, &mut ctx)?;
        debug!("expanded {phrase:?} -> {output:?}");
        Ok(output)
    }

    fn expand_template<R: Rng + ?Sized>(
        &self,
        template: &Template,
        store: &AssetStore,
        rng: &mut R,
        ctx: &mut ExpandContext,
    ) -> Result<String, ExpandError> {
        let mut output = String::new();
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Marker(marker) => {
                    let replacement = self.resolve_marker(marker, store, rng, ctx)?;
                    output.push_str(&replacement);
                }
            }
        }
        Ok(output)
    }

    fn resolve_marker<R: Rng + ?Sized>(
        &self,
        marker: &Marker,
        store: &AssetStore,
        rng: &mut R,
        ctx: &mut ExpandContext,
    ) -> Result<String, ExpandError> {
        let optional = if self.optional_markers {
            marker.as_optional()
        } else {
            None
        };
        let key = match optional {
            Some(optional) => {
                let roll: u8 = rng.random_range(1..=100);
                if roll > optional.chance {
                    trace!("dropped optional [{}] (roll {roll})", marker.name);
                    return Ok(String::new());
                }
                optional.key
            }
            None => marker.name.as_str(),
        };

        let candidates = store
            .candidates(key)
            .ok_or_else(|| ExpandError::PlaceholderNotFound {
                name: key.to_string(),
                suggestions: compute_suggestions(key, store.names()),
            })?;
        let choice = self.pick(key, candidates, rng)?;
        trace!("[{key}] at depth {} -> {choice:?}", ctx.depth());

        if !has_markers(choice) {
            return Ok(choice.to_string());
        }
        let template = parse_template(choice);
        if template.is_literal() {
            return Ok(choice.to_string());
        }

        ctx.enter(key)?;
        let expanded = self.expand_template(&template, store, rng, ctx);
        ctx.leave();
        expanded
    }

    /// Pick one candidate uniformly, honoring the search preference.
    fn pick<'s, R: Rng + ?Sized>(
        &self,
        name: &str,
        candidates: &'s [String],
        rng: &mut R,
    ) -> Result<&'s str, ExpandError> {
        if let Some(search) = self.search() {
            let needle = search.to_lowercase();
            let preferred: Vec<&String> = candidates
                .iter()
                .filter(|c| c.to_lowercase().contains(&needle))
                .collect();
            if let Some(choice) = preferred.choose(rng) {
                return Ok(choice.as_str());
            }
        }
        candidates
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| ExpandError::EmptyChoice {
                name: name.to_string(),
            })
    }
}

/// Expand `phrase` with default settings.
///
/// Shorthand for `Expander::default().expand(phrase, store, rng)`.
pub fn expand<R: Rng + ?Sized>(
    phrase: &str,
    store: &AssetStore,
    rng: &mut R,
) -> Result<String, ExpandError> {
    Expander::default().expand(phrase, store, rng)
}
