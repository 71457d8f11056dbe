/*!
 * Heuristics deciding whether a source string is worth sending to a
 * translation service.
 *
 * Catalog templates extracted from code carry plenty of strings that are
 * not prose: format expressions, markup fragments, version numbers and
 * paths. Translating them at best wastes a request and at worst breaks the
 * running module, so they are left untranslated.
 */

/// Characters that betray embedded code or template syntax
const CODE_SIGNS: [char; 9] = ['(', ')', '_', '{', '}', '+', '=', '[', ']'];

/// Characters that betray markup
const MARKUP_SIGNS: [char; 3] = ['<', '>', '/'];

/// Attribute fragments that betray inline markup
const MARKUP_ATTRIBUTES: [&str; 2] = ["style=", "class="];

/// Non-digit characters allowed in a numeric or path-like token
const NUMERIC_SYMBOLS: &str = ".,:-_/\\";

/// Returns true when `text` should be sent for translation.
///
/// Rules are applied in order and the first match wins: empty text, code
/// syntax, markup, pure numeric tokens and `label: number` pairs are all
/// rejected. Everything else is translatable.
pub fn should_translate(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    if text.contains(CODE_SIGNS) {
        return false;
    }

    if text.contains(MARKUP_SIGNS) || MARKUP_ATTRIBUTES.iter().any(|attr| text.contains(attr)) {
        return false;
    }

    if is_numeric_token(text) {
        return false;
    }

    // "Total: 123" carries no prose worth translating
    if let Some((label, value)) = text.split_once(": ") {
        let value = value.trim();
        if !label.trim().is_empty() && !value.is_empty() && is_numeric_token(value) {
            return false;
        }
    }

    true
}

/// True when every character of the trimmed text is a digit (any script) or one of `.,:-_/\`
fn is_numeric_token(text: &str) -> bool {
    text.trim()
        .chars()
        .all(|c| c.is_numeric() || NUMERIC_SYMBOLS.contains(c))
}
