/*!
 * Translation of one template into one catalog.
 *
 * The driver owns the whole document for the duration of a merge. Entries
 * are resolved strictly in document order and service calls are awaited
 * one at a time, with a pause after every successful call to stay under
 * the rate limits of free translation endpoints.
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use indicatif::ProgressBar;
use log::{debug, info, warn};

use crate::app_config::Config;
use crate::catalog::{patch_language_header, CatalogDocument, CatalogEntry};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::providers::Translator;

use super::cache::{truncate_text, ExistingTranslations};
use super::merger::{EntryOutcome, MergePlan, MergeStats, Resolution};
use super::sanitize::sanitize_translation;

/// Settings of a catalog merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOptions {
    /// Language code sent to the translation service
    pub target_language: String,

    /// Locale written into the `Language:` header
    pub locale: String,

    /// Start of the header line the `Language:` header goes after
    pub header_anchor: String,

    /// Pause after every successful service call
    pub request_delay: Duration,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl MergeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            target_language: config.target_language.clone(),
            locale: config.locale.clone(),
            header_anchor: config.catalog.header_anchor.clone(),
            request_delay: Duration::from_millis(config.translation.common.request_delay_ms),
        }
    }

    /// Same options without the pause between calls
    pub fn without_delay(mut self) -> Self {
        self.request_delay = Duration::ZERO;
        self
    }
}

/// Translates templates into catalogs through a `Translator`
pub struct CatalogTranslator {
    translator: Arc<dyn Translator>,
    options: MergeOptions,
    progress: ProgressBar,
}

impl CatalogTranslator {
    /// Create a translator reporting no progress
    pub fn new(translator: Arc<dyn Translator>, options: MergeOptions) -> Self {
        Self {
            translator,
            options,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-entry progress on `progress`
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Translate the template at `input` into the catalog at `output`
    ///
    /// A catalog already at `output` provides the translations to reuse.
    /// Failed entries stay untranslated and are reported in the returned
    /// statistics; only a missing template or an IO failure is an error.
    pub async fn translate_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input: P1,
        output: P2,
    ) -> Result<MergeStats, AppError> {
        let input = input.as_ref();
        let output = output.as_ref();

        if !FileManager::file_exists(input) {
            return Err(AppError::InputMissing(input.to_path_buf()));
        }

        let existing = ExistingTranslations::load(output)?;
        if FileManager::file_exists(output) {
            info!("Found existing catalog {:?} with {} translations", output, existing.len());
        }

        let template = FileManager::read_to_string(input)?;
        let (merged, stats) = self.merge(&template, &existing).await;

        FileManager::write_to_file(output, &merged)?;
        log_summary(&stats);

        Ok(stats)
    }

    /// Merge a template with previous translations
    ///
    /// Returns the rendered catalog and the statistics of the merge.
    pub async fn merge(&self, template: &str, existing: &ExistingTranslations) -> (String, MergeStats) {
        let mut document = CatalogDocument::parse(template);
        let plan = MergePlan::build(&document, existing);
        let mut stats = MergeStats::new(plan.work_remaining());

        info!("Found {} entries to translate", stats.work_remaining);
        self.progress.set_length(stats.work_remaining as u64);
        self.progress.set_position(0);

        // Translations made during this merge, shared by duplicate msgids
        let mut session: HashMap<String, String> = HashMap::new();

        for (entry, resolution) in document.entries_mut().zip(plan.resolutions) {
            let outcome = match resolution {
                Resolution::PassThroughEmpty => EntryOutcome::PassThroughEmpty,
                Resolution::PassThroughPreserved => EntryOutcome::PassThroughPreserved,
                Resolution::PassThroughSkipped => EntryOutcome::PassThroughSkipped,
                Resolution::Reuse(previous) => {
                    entry.translation = previous;
                    EntryOutcome::CachedReuse
                }
                Resolution::Translate => self.translate_entry(entry, &mut session, &mut stats).await,
            };
            stats.record(outcome);
        }

        self.progress.finish_and_clear();

        let rendered = patch_language_header(
            &document.render(),
            &self.options.header_anchor,
            &self.options.locale,
        );

        (rendered, stats)
    }

    async fn translate_entry(
        &self,
        entry: &mut CatalogEntry,
        session: &mut HashMap<String, String>,
        stats: &mut MergeStats,
    ) -> EntryOutcome {
        if let Some(done) = session.get(&entry.source) {
            entry.translation = done.clone();
            self.progress.inc(1);
            return EntryOutcome::Translated;
        }

        stats.service_calls += 1;
        let result = self
            .translator
            .translate(&entry.source, &self.options.target_language)
            .await;
        self.progress.inc(1);

        match result {
            Ok(raw) => {
                let translated = sanitize_translation(&entry.source, &raw);
                debug!(
                    "[{}/{}] {} -> {}",
                    stats.translated + 1,
                    stats.work_remaining,
                    truncate_text(&entry.source, 40),
                    truncate_text(&translated, 40)
                );
                self.progress.set_message(truncate_text(&entry.source, 40));

                session.insert(entry.source.clone(), translated.clone());
                entry.translation = translated;

                if !self.options.request_delay.is_zero() {
                    tokio::time::sleep(self.options.request_delay).await;
                }

                EntryOutcome::Translated
            }
            Err(e) => {
                warn!(
                    "{} failed to translate '{}': {}",
                    self.translator.name(),
                    truncate_text(&entry.source, 60),
                    e
                );
                EntryOutcome::TranslationFailed
            }
        }
    }
}

/// Log the statistics of one catalog
pub fn log_summary(stats: &MergeStats) {
    info!(
        "Entries to translate: {}, translated: {}, untranslated/failed: {}",
        stats.work_remaining,
        stats.translated,
        stats.untranslated()
    );
    debug!(
        "Reused: {}, preserved: {}, skipped: {}, service calls: {}",
        stats.reused, stats.preserved, stats.skipped, stats.service_calls
    );

    if !stats.is_complete() {
        warn!(
            "{} entries could not be translated, check the catalog and translate them by hand",
            stats.untranslated()
        );
    }
}
