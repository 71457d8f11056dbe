/*!
 * Tests for the resolution of template entries
 */

use potrans::catalog::{CatalogDocument, CatalogEntry};
use potrans::translation::{resolve_entry, EntryOutcome, MergePlan, MergeStats, Resolution};
use potrans::ExistingTranslations;

use crate::common;

fn existing_with(pairs: &[(&str, &str)]) -> ExistingTranslations {
    let mut existing = ExistingTranslations::new();
    for (source, translation) in pairs {
        existing.insert(source, translation);
    }
    existing
}

#[test]
fn test_resolve_entry_withEmptySource_shouldPassThrough() {
    let existing = ExistingTranslations::new();

    assert_eq!(resolve_entry(&CatalogEntry::new("", ""), &existing), Resolution::PassThroughEmpty);
}

#[test]
fn test_resolve_entry_withExistingTranslation_shouldReuseIt() {
    let existing = existing_with(&[("Save", "保存")]);

    assert_eq!(
        resolve_entry(&CatalogEntry::new("Save", ""), &existing),
        Resolution::Reuse("保存".to_string())
    );
}

#[test]
fn test_resolve_entry_withExistingAndTemplateTranslation_shouldPreferExisting() {
    let existing = existing_with(&[("Save", "保存")]);

    assert_eq!(
        resolve_entry(&CatalogEntry::new("Save", "Enregistrer"), &existing),
        Resolution::Reuse("保存".to_string())
    );
}

#[test]
fn test_resolve_entry_withExistingAndRejectedText_shouldStillReuse() {
    let existing = existing_with(&[("Total: 123", "合计：123")]);

    assert_eq!(
        resolve_entry(&CatalogEntry::new("Total: 123", ""), &existing),
        Resolution::Reuse("合计：123".to_string())
    );
}

#[test]
fn test_resolve_entry_withTemplateTranslation_shouldPreserveIt() {
    let existing = ExistingTranslations::new();

    assert_eq!(
        resolve_entry(&CatalogEntry::new("Save", "Enregistrer"), &existing),
        Resolution::PassThroughPreserved
    );
}

#[test]
fn test_resolve_entry_withRejectedText_shouldSkip() {
    let existing = ExistingTranslations::new();

    assert_eq!(
        resolve_entry(&CatalogEntry::new("Total: 123", ""), &existing),
        Resolution::PassThroughSkipped
    );
    assert_eq!(
        resolve_entry(&CatalogEntry::new("%(name)s", ""), &existing),
        Resolution::PassThroughSkipped
    );
}

#[test]
fn test_resolve_entry_withNewProse_shouldTranslate() {
    let existing = ExistingTranslations::new();

    assert_eq!(resolve_entry(&CatalogEntry::new("Hello", ""), &existing), Resolution::Translate);
}

#[test]
fn test_merge_plan_withTemplate_shouldCountWorkRemaining() {
    let content = common::catalog_with_entries(&[
        ("Hello", ""),
        ("Save", ""),
        ("Total: 123", ""),
        ("Cancel", ""),
        ("Confirm", "Confirmer"),
        ("Hello", ""),
    ]);
    let document = CatalogDocument::parse(&content);
    let existing = existing_with(&[("Save", "保存")]);

    let plan = MergePlan::build(&document, &existing);

    assert_eq!(
        plan.resolutions,
        vec![
            Resolution::PassThroughEmpty,
            Resolution::Translate,
            Resolution::Reuse("保存".to_string()),
            Resolution::PassThroughSkipped,
            Resolution::Translate,
            Resolution::PassThroughPreserved,
            Resolution::Translate,
        ]
    );
    assert_eq!(plan.work_remaining(), 3);
}

#[test]
fn test_merge_stats_record_shouldCountEveryOutcome() {
    let mut stats = MergeStats::new(3);
    for outcome in [
        EntryOutcome::PassThroughEmpty,
        EntryOutcome::CachedReuse,
        EntryOutcome::PassThroughPreserved,
        EntryOutcome::PassThroughSkipped,
        EntryOutcome::Translated,
        EntryOutcome::Translated,
        EntryOutcome::TranslationFailed,
    ] {
        stats.record(outcome);
    }

    assert_eq!(stats.reused, 1);
    assert_eq!(stats.preserved, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.translated, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.untranslated(), 1);
    assert!(!stats.is_complete());
}

#[test]
fn test_merge_stats_absorb_shouldSumCounters() {
    let mut totals = MergeStats::default();
    let mut first = MergeStats::new(2);
    first.record(EntryOutcome::Translated);
    first.record(EntryOutcome::Translated);
    let mut second = MergeStats::new(1);
    second.record(EntryOutcome::TranslationFailed);

    totals.absorb(&first);
    totals.absorb(&second);

    assert_eq!(totals.work_remaining, 3);
    assert_eq!(totals.translated, 2);
    assert_eq!(totals.failed, 1);
    assert_eq!(totals.untranslated(), 1);
}

#[test]
fn test_merge_stats_withNothingToDo_shouldBeComplete() {
    let stats = MergeStats::new(0);

    assert!(stats.is_complete());
    assert_eq!(stats.untranslated(), 0);
}
