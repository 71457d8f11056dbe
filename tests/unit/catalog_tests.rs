/*!
 * Tests for catalog scanning, rendering and header patching
 */

use potrans::catalog::{patch_language_header, CatalogDocument, CatalogEntry};

use crate::common;

const ANCHOR: &str = "Project-Id-Version: Odoo Server";

#[test]
fn test_parse_withServerTemplate_shouldFindHeaderAndEntries() {
    let content = common::template_with_sources(&["Hello", "Total: 123"]);
    let document = CatalogDocument::parse(&content);

    let entries: Vec<&CatalogEntry> = document.entries().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], &CatalogEntry::new("", ""));
    assert_eq!(entries[1], &CatalogEntry::new("Hello", ""));
    assert_eq!(entries[2], &CatalogEntry::new("Total: 123", ""));
}

#[test]
fn test_render_withUnmodifiedDocument_shouldReproduceInput() {
    let content = common::catalog_with_entries(&[("Hello", "你好"), ("Save", "")]);
    let document = CatalogDocument::parse(&content);

    assert_eq!(document.render(), content);
}

#[test]
fn test_render_withCrlfAndNoFinalNewline_shouldKeepBytes() {
    let content = "# comment\r\nmsgid \"Hello\"\r\nmsgstr \"\"\r\n\r\nmsgid \"Bye\"\r\nmsgstr \"\"";
    let mut document = CatalogDocument::parse(content);
    assert_eq!(document.entry_count(), 2);
    assert_eq!(document.render(), content);

    assert!(document.set_translation(1, "再见"));
    assert_eq!(
        document.render(),
        "# comment\r\nmsgid \"Hello\"\r\nmsgstr \"\"\r\n\r\nmsgid \"Bye\"\r\nmsgstr \"再见\""
    );
}

#[test]
fn test_parse_withEscapedQuotes_shouldKeepEscapesVerbatim() {
    let content = "msgid \"Say \\\"hi\\\"\"\nmsgstr \"\"\n";
    let document = CatalogDocument::parse(content);

    let entry = document.entries().next().expect("entry");
    assert_eq!(entry.source, r#"Say \"hi\""#);
    assert!(!entry.is_translated());
}

#[test]
fn test_parse_withMultilineAndPluralEntries_shouldKeepThemRaw() {
    let content = concat!(
        "msgid \"\"\n",
        "\"A long text \"\n",
        "\"on two lines\"\n",
        "msgstr \"\"\n",
        "\n",
        "msgid \"One order\"\n",
        "msgid_plural \"%d orders\"\n",
        "msgstr[0] \"\"\n",
        "\n",
        "msgid \"Confirm\"\n",
        "msgstr \"\"\n",
    );
    let document = CatalogDocument::parse(content);

    let sources: Vec<&str> = document.entries().map(|e| e.source.as_str()).collect();
    assert_eq!(sources, vec!["Confirm"]);
    assert_eq!(document.render(), content);
}

#[test]
fn test_parse_withTrailingTextAfterQuote_shouldNotMatch() {
    let content = "msgid \"Hello\" \nmsgstr \"\"\n";
    let document = CatalogDocument::parse(content);

    assert_eq!(document.entry_count(), 0);
    assert_eq!(document.render(), content);
}

#[test]
fn test_set_translation_withOutOfRangeIndex_shouldReturnFalse() {
    let mut document = CatalogDocument::parse("msgid \"Hello\"\nmsgstr \"\"\n");

    assert!(!document.set_translation(1, "你好"));
    assert!(document.set_translation(0, "你好"));
    assert_eq!(document.render(), "msgid \"Hello\"\nmsgstr \"你好\"\n");
}

#[test]
fn test_parse_withEmptyInput_shouldBeEmpty() {
    let document = CatalogDocument::parse("");

    assert_eq!(document.entry_count(), 0);
    assert_eq!(document.render(), "");
}

#[test]
fn test_patch_language_header_withServerHeader_shouldInsertAfterAnchor() {
    let content = common::TEMPLATE_HEADER;
    let patched = patch_language_header(content, ANCHOR, "zh_CN");

    let expected = content.replace(
        "\"Project-Id-Version: Odoo Server 16.0\\n\"\n",
        "\"Project-Id-Version: Odoo Server 16.0\\n\"\n\"Language: zh_CN\\n\"\n",
    );
    assert_eq!(patched, expected);
}

#[test]
fn test_patch_language_header_withExistingLanguage_shouldNotChange() {
    let content = "msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: Odoo Server 16.0\\n\"\n\"Language: fr\\n\"\n";

    assert_eq!(patch_language_header(content, ANCHOR, "zh_CN"), content);
}

#[test]
fn test_patch_language_header_withoutAnchor_shouldNotChange() {
    let content = "msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: PACKAGE VERSION\\n\"\n";

    assert_eq!(patch_language_header(content, ANCHOR, "zh_CN"), content);
}

#[test]
fn test_patch_language_header_withCrlf_shouldUseSameLineEnding() {
    let content = "msgstr \"\"\r\n\"Project-Id-Version: Odoo Server 17.0\\n\"\r\n\"MIME-Version: 1.0\\n\"\r\n";
    let patched = patch_language_header(content, ANCHOR, "zh_CN");

    assert_eq!(
        patched,
        "msgstr \"\"\r\n\"Project-Id-Version: Odoo Server 17.0\\n\"\r\n\"Language: zh_CN\\n\"\r\n\"MIME-Version: 1.0\\n\"\r\n"
    );
}

#[test]
fn test_patch_language_header_withAnchorOnLastLine_shouldKeepMissingNewline() {
    let content = "msgstr \"\"\n\"Project-Id-Version: Odoo Server 16.0\\n\"";
    let patched = patch_language_header(content, ANCHOR, "zh_CN");

    assert_eq!(
        patched,
        "msgstr \"\"\n\"Project-Id-Version: Odoo Server 16.0\\n\"\n\"Language: zh_CN\\n\""
    );
}

#[test]
fn test_patch_language_header_withLanguageInAnotherBlock_shouldStillInsert() {
    let content = concat!(
        "msgstr \"\"\n",
        "\"Project-Id-Version: Odoo Server 16.0\\n\"\n",
        "\n",
        "msgid \"Language: English\"\n",
        "msgstr \"\"\n",
    );
    let patched = patch_language_header(content, ANCHOR, "zh_CN");

    assert!(patched.contains("\"Project-Id-Version: Odoo Server 16.0\\n\"\n\"Language: zh_CN\\n\"\n\n"));
}
