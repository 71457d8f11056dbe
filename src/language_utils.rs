//! Language utilities for language tags
//!
//! Translation services want tags like `zh-CN`, gettext wants locales like
//! `zh_CN`. Both are an ISO 639 language code optionally followed by a
//! region or script subtag; this module validates and converts them.

use anyhow::{anyhow, Result};
use isolang::Language;

/// Language code type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
}

/// Split a tag such as `zh-CN`, `zh_CN` or `pt` into language and subtag
pub fn split_tag(tag: &str) -> (String, Option<String>) {
    let tag = tag.trim();
    match tag.split_once(['-', '_']) {
        Some((language, subtag)) => (language.to_lowercase(), Some(subtag.to_string())),
        None => (tag.to_lowercase(), None),
    }
}

/// Validate the language part of a tag as ISO 639-1 or ISO 639-2/T
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let (language, subtag) = split_tag(code);

    if let Some(subtag) = &subtag {
        if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid language code: {}", code));
        }
    }

    // Check for ISO 639-1 (2-letter) code
    if language.len() == 2 {
        if Language::from_639_1(&language).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    }
    // Check for ISO 639-2/T (3-letter) code
    else if language.len() == 3 && Language::from_639_3(&language).is_some() {
        return Ok(LanguageCodeType::Part2T);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Convert a service tag to a gettext locale (`zh-cn` -> `zh_CN`)
pub fn to_locale(code: &str) -> Result<String> {
    validate_language_code(code)?;
    let (language, subtag) = split_tag(code);

    Ok(match subtag {
        // Region subtags are upper case, script subtags title case
        Some(subtag) if subtag.len() == 2 => format!("{}_{}", language, subtag.to_uppercase()),
        Some(subtag) => {
            let mut chars = subtag.chars();
            let title: String = chars
                .next()
                .map(|first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
                .unwrap_or_default();
            format!("{}_{}", language, title)
        }
        None => language,
    })
}

/// Get the language name from a tag
///
/// Chinese tags name their script, since that is what a translation
/// prompt needs to know.
pub fn get_language_name(code: &str) -> Result<String> {
    validate_language_code(code)?;
    let (language, subtag) = split_tag(code);

    let lang = if language.len() == 2 {
        Language::from_639_1(&language)
    } else {
        Language::from_639_3(&language)
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    if lang == Language::Zho {
        let subtag = subtag.map(|s| s.to_lowercase());
        return Ok(match subtag.as_deref() {
            Some("tw" | "hk" | "mo" | "hant") => "Traditional Chinese".to_string(),
            _ => "Simplified Chinese".to_string(),
        });
    }

    Ok(lang.to_name().to_string())
}
