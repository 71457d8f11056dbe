/*!
 * Line-oriented model of a gettext catalog.
 *
 * Only the single-line `msgid "..."` / `msgstr "..."` pair is understood.
 * Everything else (headers, comments, multi-line strings, plural forms) is
 * kept as raw text and written back untouched, so rendering a document
 * that was not modified reproduces the input byte for byte.
 */

const MSGID_PREFIX: &str = "msgid \"";
const MSGSTR_PREFIX: &str = "msgstr \"";

/// One message-id/message-string pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The quoted source text, escapes kept as written
    pub source: String,

    /// The quoted translation, empty when untranslated
    pub translation: String,
}

impl CatalogEntry {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }

    pub fn is_translated(&self) -> bool {
        !self.translation.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text outside any recognized pair
    Raw(String),

    /// A recognized pair with the line endings of both of its lines
    Entry {
        entry: CatalogEntry,
        msgid_eol: String,
        msgstr_eol: String,
    },
}

/// A catalog as raw segments interleaved with entry slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDocument {
    segments: Vec<Segment>,
}

impl CatalogDocument {
    /// Scan catalog text for pairs
    ///
    /// A pair is a line that is exactly `msgid "<text>"` immediately
    /// followed by a line that is exactly `msgstr "<text>"`. The quoted
    /// text runs from the first to the last quote of the line.
    pub fn parse(content: &str) -> Self {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let mut segments = Vec::new();
        let mut raw = String::new();
        let mut i = 0;

        while i < lines.len() {
            let (msgid_body, msgid_eol) = split_line_ending(lines[i]);

            let pair = quoted_value(msgid_body, MSGID_PREFIX).and_then(|source| {
                let (msgstr_body, msgstr_eol) = split_line_ending(lines.get(i + 1)?);
                let translation = quoted_value(msgstr_body, MSGSTR_PREFIX)?;
                Some((source, translation, msgstr_eol))
            });

            match pair {
                Some((source, translation, msgstr_eol)) => {
                    if !raw.is_empty() {
                        segments.push(Segment::Raw(std::mem::take(&mut raw)));
                    }
                    segments.push(Segment::Entry {
                        entry: CatalogEntry::new(source, translation),
                        msgid_eol: msgid_eol.to_string(),
                        msgstr_eol: msgstr_eol.to_string(),
                    });
                    i += 2;
                }
                None => {
                    raw.push_str(lines[i]);
                    i += 1;
                }
            }
        }

        if !raw.is_empty() {
            segments.push(Segment::Raw(raw));
        }

        Self { segments }
    }

    /// Entries in document order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Entry { entry, .. } => Some(entry),
            Segment::Raw(_) => None,
        })
    }

    /// Mutable entries in document order
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut CatalogEntry> {
        self.segments.iter_mut().filter_map(|segment| match segment {
            Segment::Entry { entry, .. } => Some(entry),
            Segment::Raw(_) => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    /// Replace the translation of the entry at `index` (document order)
    ///
    /// Returns false when there is no such entry.
    pub fn set_translation(&mut self, index: usize, translation: impl Into<String>) -> bool {
        match self.entries_mut().nth(index) {
            Some(entry) => {
                entry.translation = translation.into();
                true
            }
            None => false,
        }
    }

    /// Rebuild the catalog text
    pub fn render(&self) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Raw(text) => output.push_str(text),
                Segment::Entry {
                    entry,
                    msgid_eol,
                    msgstr_eol,
                } => {
                    output.push_str(MSGID_PREFIX);
                    output.push_str(&entry.source);
                    output.push('"');
                    output.push_str(msgid_eol);
                    output.push_str(MSGSTR_PREFIX);
                    output.push_str(&entry.translation);
                    output.push('"');
                    output.push_str(msgstr_eol);
                }
            }
        }
        output
    }
}

/// Split a line into its body and its `\n` / `\r\n` terminator
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// The text between `prefix` and the closing quote ending the line
fn quoted_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix('"')
}
