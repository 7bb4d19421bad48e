//! Fuzzy Corrector: snaps noisy resume tokens onto the job keyword vocabulary.
//!
//! Cost is O(|vocabulary| × |token| × |term|) per token. The vocabulary is the
//! job keyword set (at most N terms); do not point this at a full dictionary.

/// Default minimum similarity ratio for a correction.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Normalized edit-distance ratio in [0, 1].
///
/// `(|a| + |b| - d) / (|a| + |b|)` where `d` is the edit distance with
/// insertions and deletions costing 1 and substitutions costing 2. Two empty
/// strings are identical (1.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let distance = weighted_edit_distance(&a_chars, &b_chars);
    (total - distance) as f64 / total as f64
}

/// Two-row edit distance with substitution cost 2.
fn weighted_edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = if ca == cb { 0 } else { 2 };
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + substitution);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Corrects tokens against a fixed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyCorrector<'a> {
    vocabulary: &'a [String],
    threshold: f64,
}

impl<'a> FuzzyCorrector<'a> {
    pub fn new(vocabulary: &'a [String], threshold: f64) -> Self {
        Self {
            vocabulary,
            threshold,
        }
    }

    /// Returns the closest vocabulary term when its ratio clears the threshold,
    /// otherwise the token itself. The first term wins on equal ratios.
    pub fn correct<'t>(&self, token: &'t str) -> &'t str
    where
        'a: 't,
    {
        let mut best: Option<(&'a str, f64)> = None;
        for term in self.vocabulary {
            let ratio = similarity_ratio(token, term);
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((term.as_str(), ratio));
            }
        }

        match best {
            Some((term, ratio)) if ratio >= self.threshold => term,
            _ => token,
        }
    }

    /// Corrects every token, preserving order and multiplicity.
    pub fn correct_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.correct(token).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ratio_identical_is_one() {
        assert_eq!(similarity_ratio("python", "python"), 1.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_disjoint_is_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_ratio_single_substitution() {
        // lensum 8, distance 2
        assert!((similarity_ratio("java", "jawa") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_single_insertion() {
        // one insertion each
        assert!((similarity_ratio("pyton", "python") - 10.0 / 11.0).abs() < 1e-12);
        assert!((similarity_ratio("kubernetes", "kubernetess") - 20.0 / 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(
            similarity_ratio("backend", "bakend"),
            similarity_ratio("bakend", "backend")
        );
    }

    #[test]
    fn test_correct_snaps_typo_to_keyword() {
        let vocabulary = vocab(&["python", "backend", "system"]);
        let corrector = FuzzyCorrector::new(&vocabulary, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(corrector.correct("pyton"), "python");
        assert_eq!(corrector.correct("bakend"), "backend");
    }

    #[test]
    fn test_correct_keeps_unrelated_token() {
        let vocabulary = vocab(&["python", "backend"]);
        let corrector = FuzzyCorrector::new(&vocabulary, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(corrector.correct("graphic"), "graphic");
    }

    #[test]
    fn test_correct_threshold_is_inclusive() {
        let vocabulary = vocab(&["jawa"]);
        assert_eq!(FuzzyCorrector::new(&vocabulary, 0.75).correct("java"), "jawa");
        assert_eq!(FuzzyCorrector::new(&vocabulary, 0.76).correct("java"), "java");
    }

    #[test]
    fn test_empty_vocabulary_is_noop() {
        let vocabulary: Vec<String> = vec![];
        let corrector = FuzzyCorrector::new(&vocabulary, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(corrector.correct("rust"), "rust");
    }

    #[test]
    fn test_first_term_wins_on_tie() {
        let vocabulary = vocab(&["cast", "cart"]);
        let corrector = FuzzyCorrector::new(&vocabulary, 0.5);
        assert_eq!(corrector.correct("cat"), "cast");
    }

    #[test]
    fn test_correct_tokens_preserves_multiplicity() {
        let vocabulary = vocab(&["python"]);
        let corrector = FuzzyCorrector::new(&vocabulary, DEFAULT_FUZZY_THRESHOLD);
        let tokens = vocab(&["pyton", "design", "python"]);
        assert_eq!(
            corrector.correct_tokens(&tokens),
            vec!["python", "design", "python"]
        );
    }
}
