//! Single-field text cleanup for scraped review fragments.

use regex::Regex;
use unicode_properties::UnicodeEmoji;

/// Cleans one text field at a time: entity decode, tag strip, emoji removal,
/// whitespace collapse, then trim, in that order. Regexes are compiled once
/// per instance and reused across rows.
pub struct Sanitizer {
    tags: Regex,
    spaces: Regex,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            // A plain open-angle-to-close-angle scan, not an HTML parser: a
            // bare `<` with a later `>` swallows the text between them
            tags: Regex::new(r"<[^>]*>").unwrap(),
            spaces: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Clean a single field. Absent values (empty strings) pass through.
    pub fn clean(&self, raw: &str) -> String {
        let decoded = html_escape::decode_html_entities(raw);
        let stripped = self.tags.replace_all(&decoded, "");
        let kept: String = stripped.chars().filter(|&c| !is_emoji(c)).collect();
        let collapsed = self.spaces.replace_all(&kept, " ");
        collapsed.trim().to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Code points removed as emoji, including the invisible glue that only
/// occurs inside emoji sequences (variation selectors, ZWJ, combining keycap,
/// tag characters). ASCII always stays: `#`, `*` and the digits carry the
/// Unicode emoji property but are ordinary text outside a keycap sequence.
fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }

    match c {
        '\u{200D}' | '\u{20E3}' | '\u{FE0E}' | '\u{FE0F}' => true,
        '\u{E0020}'..='\u{E007F}' => true,
        _ => c.is_emoji_char(),
    }
}
