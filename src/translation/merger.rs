/*!
 * Reconciliation of template entries with previous translations.
 *
 * The merger decides, without touching the network, what happens to every
 * entry of a template. Only entries planned as `Resolution::Translate`
 * reach the translation service; the driver turns those into either a
 * `Translated` or a `TranslationFailed` outcome.
 */

use crate::catalog::{CatalogDocument, CatalogEntry};

use super::cache::ExistingTranslations;
use super::classifier::should_translate;

/// What the merger decided for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty source text, left as is
    PassThroughEmpty,

    /// Reuse the translation of the previous catalog
    Reuse(String),

    /// The template already carries a translation, left as is
    PassThroughPreserved,

    /// Rejected by the classifier, left untranslated
    PassThroughSkipped,

    /// Must be sent to the translation service
    Translate,
}

/// Terminal state of one entry after a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    CachedReuse,
    PassThroughEmpty,
    PassThroughPreserved,
    PassThroughSkipped,
    Translated,
    TranslationFailed,
}

/// Resolve one template entry, first matching rule wins
pub fn resolve_entry(entry: &CatalogEntry, existing: &ExistingTranslations) -> Resolution {
    if entry.source.is_empty() {
        return Resolution::PassThroughEmpty;
    }

    if let Some(previous) = existing.get(&entry.source) {
        return Resolution::Reuse(previous.to_string());
    }

    if entry.is_translated() {
        return Resolution::PassThroughPreserved;
    }

    if !should_translate(&entry.source) {
        return Resolution::PassThroughSkipped;
    }

    Resolution::Translate
}

/// Resolutions of a whole template, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub resolutions: Vec<Resolution>,
}

impl MergePlan {
    /// Plan every entry of `document` against `existing`
    pub fn build(document: &CatalogDocument, existing: &ExistingTranslations) -> Self {
        let resolutions = document
            .entries()
            .map(|entry| resolve_entry(entry, existing))
            .collect();
        Self { resolutions }
    }

    /// Entries that still need the translation service
    pub fn work_remaining(&self) -> usize {
        self.resolutions
            .iter()
            .filter(|resolution| matches!(resolution, Resolution::Translate))
            .count()
    }
}

/// Counters accumulated over one catalog merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries that needed translation when the merge started
    pub work_remaining: usize,

    /// Entries that received a fresh translation
    pub translated: usize,

    /// Requests actually sent to the service
    pub service_calls: usize,

    /// Entries filled from the previous catalog
    pub reused: usize,

    /// Entries whose template translation was kept
    pub preserved: usize,

    /// Entries rejected by the classifier
    pub skipped: usize,

    /// Entries whose service call failed
    pub failed: usize,
}

impl MergeStats {
    pub fn new(work_remaining: usize) -> Self {
        Self {
            work_remaining,
            ..Self::default()
        }
    }

    /// Count one terminal entry state
    pub fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::CachedReuse => self.reused += 1,
            EntryOutcome::PassThroughPreserved => self.preserved += 1,
            EntryOutcome::PassThroughSkipped => self.skipped += 1,
            EntryOutcome::Translated => self.translated += 1,
            EntryOutcome::TranslationFailed => self.failed += 1,
            EntryOutcome::PassThroughEmpty => {}
        }
    }

    /// Entries that needed translation but did not get one
    pub fn untranslated(&self) -> usize {
        self.work_remaining.saturating_sub(self.translated)
    }

    pub fn is_complete(&self) -> bool {
        self.translated >= self.work_remaining
    }

    /// Fold the counters of another merge into these
    pub fn absorb(&mut self, other: &MergeStats) {
        self.work_remaining += other.work_remaining;
        self.translated += other.translated;
        self.service_calls += other.service_calls;
        self.reused += other.reused;
        self.preserved += other.preserved;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}
