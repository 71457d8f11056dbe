/*!
 * One-shot patch of the catalog header.
 *
 * Templates exported from the server carry no `Language:` header. Editors
 * and the server's own importer guess the language from it, so the
 * generated catalog gets one right after the project version line.
 */

const LANGUAGE_HEADER: &str = "\"Language:";

/// Insert `"Language: <locale>\n"` after the header line starting with
/// `"<anchor>`.
///
/// The patch is textual: if no line starts with the anchor, or the header
/// block that line belongs to already declares a language, the content is
/// returned unchanged.
pub fn patch_language_header(content: &str, anchor: &str, locale: &str) -> String {
    let anchor_line = format!("\"{}", anchor);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let Some(position) = lines.iter().position(|line| line.starts_with(&anchor_line)) else {
        return content.to_string();
    };

    // The header block is the run of quoted continuation lines around the anchor
    let block_start = lines[..position]
        .iter()
        .rposition(|line| !line.starts_with('"'))
        .map_or(0, |index| index + 1);
    let block_end = lines[position..]
        .iter()
        .position(|line| !line.starts_with('"'))
        .map_or(lines.len(), |offset| position + offset);

    if lines[block_start..block_end]
        .iter()
        .any(|line| line.starts_with(LANGUAGE_HEADER))
    {
        return content.to_string();
    }

    let eol = if lines[position].ends_with("\r\n") { "\r\n" } else { "\n" };
    let mut output = String::with_capacity(content.len() + locale.len() + 16);
    for (index, line) in lines.iter().enumerate() {
        output.push_str(line);
        if index == position {
            if !line.ends_with('\n') {
                output.push_str(eol);
            }
            output.push_str(&format!("\"Language: {}\\n\"{}", locale, eol));
        }
    }

    // Keep a missing final newline missing
    if !content.ends_with('\n') && position == lines.len() - 1 {
        let trimmed_len = output.trim_end_matches(['\r', '\n']).len();
        output.truncate(trimmed_len);
    }

    output
}
