//! Turns a free-text list reply into clean criterion labels.

/// Glyphs treated as list bullets when followed by a space.
const BULLET_GLYPHS: &[char] = &['-', '•', '*', '◦', '▪'];

/// Splits the reply into lines and strips list markup, keeping the reply's order.
/// Blank lines, and lines that are blank once markup is removed, are dropped.
pub fn parse_criteria_reply(reply: &str) -> Vec<String> {
    reply.lines().filter_map(clean_line).collect()
}

fn clean_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let item = strip_bullet(strip_ordinal(line)).trim();
    (!item.is_empty()).then(|| item.to_string())
}

/// `"12. foo"` -> `"foo"`. The dot must be followed by whitespace or end the line, so
/// `"2.5 years"` is untouched.
fn strip_ordinal(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    line[digits..]
        .strip_prefix('.')
        .and_then(marker_rest)
        .unwrap_or(line)
}

/// `"- foo"` -> `"foo"`. `"-Self-motivated"` is untouched.
fn strip_bullet(line: &str) -> &str {
    BULLET_GLYPHS
        .iter()
        .find_map(|glyph| line.strip_prefix(*glyph).and_then(marker_rest))
        .unwrap_or(line)
}

/// Text after a list marker, provided the marker is separated from it.
fn marker_rest(rest: &str) -> Option<&str> {
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}
