/*!
 * Cleanup of text coming back from a translation service.
 *
 * Services happily "improve" punctuation and whitespace: quotes come back
 * full-width, the `\n` escape comes back as `\ n` or with a space glued in
 * front of it, and LLM backends sometimes answer with real line breaks.
 * Any of these would corrupt a single-line catalog string.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Full-width quotation marks and their ASCII replacement
const QUOTE_REPLACEMENTS: [(char, char); 4] = [
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
];

/// A backslash split from its `n` by whitespace
static BROKEN_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\[ \t]+n").expect("valid regex")
});

/// Whitespace glued in front of a `\n` escape
static SPACED_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]+\\n").expect("valid regex")
});

/// Raw line breaks of any flavor
static RAW_LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("valid regex")
});

/// Sanitize a fresh translation of `source`
pub fn sanitize_translation(source: &str, translated: &str) -> String {
    let mut text: String = translated
        .trim()
        .chars()
        .map(|c| {
            QUOTE_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect();

    text = RAW_LINE_BREAK_REGEX.replace_all(&text, r"\n").into_owned();
    text = BROKEN_ESCAPE_REGEX.replace_all(&text, r"\n").into_owned();

    if !SPACED_ESCAPE_REGEX.is_match(source) {
        text = SPACED_ESCAPE_REGEX.replace_all(&text, r"\n").into_owned();
    }

    // An unpaired trailing backslash would escape the closing quote
    if ends_with_unpaired_backslash(&text) && !source.ends_with('\\') {
        text.pop();
    }

    text
}

fn ends_with_unpaired_backslash(text: &str) -> bool {
    text.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}
