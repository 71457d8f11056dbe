/*!
 * Catalog translation.
 *
 * This module contains the decision logic wrapped around the translation
 * service. It is split into several submodules:
 *
 * - `classifier`: Which source strings are worth translating
 * - `cache`: Translations carried over from the previous catalog
 * - `merger`: Per-entry resolution of a template against those translations
 * - `sanitize`: Cleanup of service output
 * - `driver`: Orchestration of one template-to-catalog pass
 */

// Re-export main types for easier usage
pub use self::cache::ExistingTranslations;
pub use self::classifier::should_translate;
pub use self::driver::{CatalogTranslator, MergeOptions};
pub use self::merger::{resolve_entry, EntryOutcome, MergePlan, MergeStats, Resolution};
pub use self::sanitize::sanitize_translation;

// Submodules
pub mod cache;
pub mod classifier;
pub mod driver;
pub mod merger;
pub mod sanitize;
