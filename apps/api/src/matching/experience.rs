//! Experience Extractor: years of experience from raw (non-normalized) text.

use std::sync::LazyLock;

use regex::Regex;

/// "5 years", "3+ yrs", "experience: 4", "experience - 7".
static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([0-9]+)\+?\s*(?:years|yrs)",
        r"experience\s*[:\-]?\s*([0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern is valid"))
    .collect()
});

/// Returns the largest year count mentioned anywhere in the text, or 0.
///
/// Takes the maximum rather than the sum: the same tenure is often stated
/// more than once. Numbers too large for `u32` are ignored.
pub fn extract_experience(text: &str) -> u32 {
    let lowered = text.to_lowercase();

    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(&lowered))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
