//! Public AST types for phrasegen templates.
//!
//! These types are public so tooling (the dataset lint, the CLI) can inspect
//! which placeholders a string references without expanding it.

/// A scanned template string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over the markers of this template in left-to-right order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Marker(marker) => Some(marker),
            Segment::Literal(_) => None,
        })
    }

    /// True if the template contains no markers at all.
    pub fn is_literal(&self) -> bool {
        self.markers().next().is_none()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A `[name]` substitution point.
    Marker(Marker),
}

/// A placeholder marker: the text between `[` and the nearest following `]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Enclosed text, verbatim. Used as the asset key unless optional
    /// markers are enabled.
    pub name: String,
}

/// The parts of an optional marker such as `[villain?30]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalMarker<'a> {
    /// Asset key without the `?NN` suffix.
    pub key: &'a str,
    /// Chance in percent (0..=100) that the marker is kept.
    pub chance: u8,
}

/// Chance used by `[key?]` when no percentage is given.
pub const DEFAULT_OPTIONAL_CHANCE: u8 = 50;

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Interpret this marker as `key?` or `key?NN`.
    ///
    /// Returns `None` when the name has no `?` suffix, when the key before it
    /// is empty, or when the suffix is not 0-3 ASCII digits. Percentages
    /// above 100 are clamped.
    pub fn as_optional(&self) -> Option<OptionalMarker<'_>> {
        let (key, digits) = self.name.rsplit_once('?')?;
        if key.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let chance = if digits.is_empty() {
            DEFAULT_OPTIONAL_CHANCE
        } else {
            let pct: u16 = digits.parse().ok()?;
            u8::try_from(pct.min(100)).ok()?
        };
        Some(OptionalMarker { key, chance })
    }
}
