//! Text Normalizer: raw text to ordered lemma+stem tokens.

use unicode_segmentation::UnicodeSegmentation;

use crate::matching::resources::language_resources;

/// Normalizes raw text into an ordered token sequence.
///
/// 1. lowercase
/// 2. split on Unicode word boundaries (UAX #29) and drop possessive endings
/// 3. keep purely alphabetic tokens (numbers are dropped here; experience is
///    read from the raw text separately)
/// 4. drop English stopwords
/// 5. lemmatize, then stem
///
/// Duplicates are kept. Empty input yields an empty vector.
pub fn normalize(text: &str) -> Vec<String> {
    let resources = language_resources();
    let lowered = text.to_lowercase();

    lowered
        .unicode_words()
        .map(strip_possessive)
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| !resources.is_stopword(word))
        .map(|word| resources.stem(&resources.lemmatize(word)))
        .filter(|token| !token.is_empty())
        .collect()
}

/// `python's` -> `python`. UAX #29 keeps the apostrophe inside the word.
fn strip_possessive(word: &str) -> &str {
    ["'s", "\u{2019}s", "'", "\u{2019}"]
        .iter()
        .find_map(|suffix| word.strip_suffix(*suffix))
        .unwrap_or(word)
}
