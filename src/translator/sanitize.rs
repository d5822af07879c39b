use regex::Regex;

use super::payload::TRANSLATION_LABEL;

/// Cleans raw model output into well-formed Korean text.
///
/// The rules run in a fixed order; later rules assume the earlier ones
/// already ran. Parentheses are assumed not to nest (known limitation:
/// nested parentheses leave stray characters for the whitelist to drop).
pub struct Sanitizer {
    parenthetical: Regex,
    latin: Regex,
    emoji: Regex,
    non_hangul: Regex,
    whitespace: Regex,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            parenthetical: Regex::new(r"\([^)]*\)").unwrap(),
            latin: Regex::new(r"[a-zA-Z]").unwrap(),
            emoji: Regex::new(r"[\u{1F300}-\u{1F9FF}]").unwrap(),
            non_hangul: Regex::new(r"[^가-힣\s]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Pure; an empty result is a valid value here, the caller decides
    /// that it means the translation failed.
    pub fn clean(&self, raw: &str) -> String {
        // Models tend to echo the prompt or reason out loud before
        // answering; keep only what follows the last prompt label.
        let text = match raw.rfind(TRANSLATION_LABEL) {
            Some(idx) => &raw[idx + TRANSLATION_LABEL.len()..],
            None => raw,
        };

        // First line only, to drop appended explanations or retries.
        let text = text.lines().next().unwrap_or("").trim();

        // Some backends emit the same sentence twice back to back.
        let text = collapse_duplicate_halves(text);

        let text = self.parenthetical.replace_all(&text, "");
        let text = self.latin.replace_all(&text, "");
        let text = self.emoji.replace_all(&text, "");
        let text = self.non_hangul.replace_all(&text, "");
        let text = self.whitespace.replace_all(&text, " ");

        text.trim().to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

fn collapse_duplicate_halves(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 1 && words.len() % 2 == 0 {
        let half = words.len() / 2;
        if words[..half] == words[half..] {
            return words[..half].join(" ");
        }
    }
    text.to_string()
}
