/*!
 * Translations carried over from a previous run.
 *
 * Before a template is merged, the catalog already sitting at the
 * destination is scanned and every non-empty translation is remembered.
 * Those translations win over anything else, which is what keeps a rerun
 * from calling the service again for work that is already done.
 */

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::catalog::CatalogDocument;
use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Mapping from source text to its previous translation
#[derive(Debug, Clone, Default)]
pub struct ExistingTranslations {
    /// Source text to translation, non-empty translations only
    translations: HashMap<String, String>,
}

impl ExistingTranslations {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the non-empty pairs of a catalog
    ///
    /// The first translation seen for a source text wins.
    pub fn from_catalog(content: &str) -> Self {
        let mut existing = Self::new();
        for entry in CatalogDocument::parse(content).entries() {
            existing.insert(&entry.source, &entry.translation);
        }
        existing
    }

    /// Load the catalog at `path`, or an empty mapping when there is none
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Ok(Self::new());
        }

        let content = FileManager::read_to_string(path)?;
        let existing = Self::from_catalog(&content);
        debug!("Loaded {} existing translations from {:?}", existing.len(), path);
        Ok(existing)
    }

    /// Remember a translation unless it is empty or the source is already known
    pub fn insert(&mut self, source: &str, translation: &str) {
        if source.is_empty() || translation.is_empty() {
            return;
        }
        self.translations
            .entry(source.to_string())
            .or_insert_with(|| translation.to_string());
    }

    /// Get the previous translation of a source text
    pub fn get(&self, source: &str) -> Option<&str> {
        self.translations.get(source).map(String::as_str)
    }

    /// Get the number of remembered translations
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Check if nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
