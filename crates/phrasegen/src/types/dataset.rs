use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::AssetStore;
use crate::expander::LoadError;

/// A persisted phrase dataset: starting templates plus the asset store.
///
/// The on-disk form is a JSON object with two required fields:
///
/// ```json
/// {
///   "templates": ["[hero] and the [thing]"],
///   "assets": { "hero": ["Anna", "Ben"], "thing": ["lost key"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Starting templates; one is chosen per generated phrase.
    pub templates: Vec<String>,
    /// Placeholder name to candidate replacements.
    pub assets: AssetStore,
}

impl Dataset {
    pub fn new(templates: Vec<String>, assets: AssetStore) -> Self {
        Self { templates, assets }
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(&content, path)?;
        debug!(
            "loaded {}: {} templates, {} assets",
            path.display(),
            dataset.templates.len(),
            dataset.assets.len()
        );
        Ok(dataset)
    }

    /// Parse a dataset from a JSON string.
    ///
    /// Errors report `<string>` as the path.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::Parse {
            path: PathBuf::from(path),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
    }
}
