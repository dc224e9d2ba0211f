use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::{Deserialize, Serialize};

/// Mapping from placeholder name to its candidate replacement strings.
///
/// The store is built once (usually from a [`Dataset`](crate::Dataset)) and
/// only read during expansion. Candidate order is preserved as loaded.
///
/// # Example
///
/// ```
/// use phrasegen::AssetStore;
///
/// let store = AssetStore::from_iter([
///     ("animal", vec!["cat", "dog"]),
///     ("greeting", vec!["hello [animal]"]),
/// ]);
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.candidates("animal").map(<[String]>::len), Some(2));
/// assert!(store.candidates("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetStore {
    assets: BTreeMap<String, Vec<String>>,
}

impl AssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the candidates for a placeholder.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets.insert(
            name.into(),
            candidates.into_iter().map(Into::into).collect(),
        );
    }

    /// Candidates for a placeholder, or `None` if the name is unknown.
    pub fn candidates(&self, name: &str) -> Option<&[String]> {
        self.assets.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    /// Placeholder names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.assets.iter()
    }
}

impl<'a> IntoIterator for &'a AssetStore {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, I, S> FromIterator<(K, I)> for AssetStore
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut store = AssetStore::new();
        for (name, candidates) in iter {
            store.insert(name, candidates);
        }
        store
    }
}
