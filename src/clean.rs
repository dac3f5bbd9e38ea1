//! Textual line filter for sitemap documents.
//!
//! No XML parsing: a line is dropped when its lowercase form contains one of
//! [`DROPPED_TAGS`] anywhere, even inside an unrelated token.

/// Opening tags whose lines are removed.
pub const DROPPED_TAGS: [&str; 2] = ["<priority>", "<lastmod>"];

/// Output of [`clean_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub content: String,
    pub kept: usize,
    pub dropped: usize,
}

/// True if `line` contains any dropped tag, ignoring case.
pub fn is_dropped(line: &str) -> bool {
    let lower = line.to_lowercase();
    DROPPED_TAGS.iter().any(|tag| lower.contains(tag))
}

/// Removes every line containing a dropped tag, trims the rest, and joins them with `\n`.
pub fn clean(raw: &str) -> String {
    clean_with_report(raw).content
}

/// Like [`clean`] but also counts kept and dropped lines.
pub fn clean_with_report(raw: &str) -> Cleaned {
    let mut kept_lines: Vec<&str> = Vec::new();
    let mut dropped = 0;
    for line in split_lines(raw) {
        if is_dropped(line) {
            dropped += 1;
            continue;
        }
        kept_lines.push(trim_line(line));
    }
    Cleaned {
        kept: kept_lines.len(),
        dropped,
        content: kept_lines.join("\n"),
    }
}

/// Characters that end a line. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Strips whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Splits on every line break (see [`is_line_break`]). A trailing terminator
/// does not yield an empty final line; empty input yields no lines.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, c)) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
