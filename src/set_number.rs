/// Set number extraction and validation for BrickMind
use regex::Regex;
use std::sync::LazyLock;

// ASCII word boundaries: a digit run glued to a Cyrillic letter still counts as standalone
static SET_NUMBER_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{4,5})(?-u:\b)").expect("set number pattern is valid")
});

static SET_NUMBER_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,5}$").expect("set number pattern is valid"));

/// Extract a LEGO set number from free text
///
/// Algorithm:
/// 1. Scan left to right for a run of 4 or 5 ASCII digits
/// 2. The run must be word-bounded on both sides (no letters, digits or `_` glued to it)
/// 3. Return the first such run
///
/// Only the first match is used. Titles carrying several numbers (a year and a
/// set number, say) resolve to whichever appears first.
///
/// Examples:
/// - "LEGO 75367 Star Wars" → 75367
/// - "Technic 2022 Ford GT 42154" → 2022
/// - "123" → None (too short)
/// - "123456" → None (too long)
pub fn extract_set_number(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    SET_NUMBER_IN_TEXT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// True when the whole (trimmed) input is a 4 or 5 digit set number
pub fn is_valid_set_number(input: &str) -> bool {
    SET_NUMBER_EXACT.is_match(input.trim())
}
