//! Match Scorer: keyword overlap (canonical) or TF-IDF cosine similarity.
//!
//! Both modes produce a score in [0, 100] rounded to two decimals and share the
//! same output schema. `matched_keywords` always comes from keyword overlap.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::matching::keywords::{cosine_similarity, TermVector};

/// Which scoring strategy fills `match_score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// `100 × |job_keywords ∩ corrected resume tokens| / |job_keywords|`
    #[default]
    KeywordOverlap,
    /// Cosine of TF-IDF vectors fitted jointly over the job and the whole batch.
    CosineSimilarity,
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" | "keywords" | "overlap" | "keyword_overlap" => Ok(Self::KeywordOverlap),
            "cosine" | "tfidf" | "cosine_similarity" => Ok(Self::CosineSimilarity),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected 'keyword' or 'cosine')"
            )),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeywordOverlap => f.write_str("keyword"),
            Self::CosineSimilarity => f.write_str("cosine"),
        }
    }
}

/// Result of intersecting job keywords with a resume's corrected tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordOverlap {
    /// Matched keywords in job keyword order.
    pub matched: Vec<String>,
    pub score: f64,
}

/// Intersects job keywords with corrected resume tokens.
///
/// An empty keyword set scores 0 rather than dividing by zero.
pub fn keyword_overlap(job_keywords: &[String], corrected: &BTreeSet<String>) -> KeywordOverlap {
    let mut matched: Vec<String> = Vec::new();
    for keyword in job_keywords {
        if corrected.contains(keyword) && !matched.contains(keyword) {
            matched.push(keyword.clone());
        }
    }

    let score = if job_keywords.is_empty() {
        0.0
    } else {
        round_score(100.0 * matched.len() as f64 / job_keywords.len() as f64)
    };

    KeywordOverlap { matched, score }
}

/// Cosine similarity between the job and a resume vector, scaled to [0, 100].
pub fn cosine_score(job: &TermVector, resume: &TermVector) -> f64 {
    round_score(100.0 * cosine_similarity(job, resume))
}

/// Rounds to two decimals and clamps into [0, 100].
pub fn round_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    ((raw * 100.0).round() / 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::keywords::TfIdfModel;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_scoring_mode_parse() {
        assert_eq!("keyword".parse::<ScoringMode>().unwrap(), ScoringMode::KeywordOverlap);
        assert_eq!(" Cosine ".parse::<ScoringMode>().unwrap(), ScoringMode::CosineSimilarity);
        assert!("bm25".parse::<ScoringMode>().is_err());
    }

    #[test]
    fn test_scoring_mode_default_is_keyword_overlap() {
        assert_eq!(ScoringMode::default(), ScoringMode::KeywordOverlap);
        assert_eq!(ScoringMode::default().to_string(), "keyword");
    }

    #[test]
    fn test_scoring_mode_display_parses_back() {
        for mode in [ScoringMode::KeywordOverlap, ScoringMode::CosineSimilarity] {
            assert_eq!(mode.to_string().parse::<ScoringMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_overlap_partial_match() {
        let keywords = strings(&["backend", "python", "rust"]);
        let overlap = keyword_overlap(&keywords, &set(&["python", "backend", "design"]));
        assert_eq!(overlap.matched, vec!["backend", "python"]);
        assert_eq!(overlap.score, 66.67);
    }

    #[test]
    fn test_overlap_full_match_is_100() {
        let keywords = strings(&["python", "rust"]);
        let overlap = keyword_overlap(&keywords, &set(&["python", "rust", "go"]));
        assert_eq!(overlap.score, 100.0);
    }

    #[test]
    fn test_overlap_empty_keywords_scores_zero() {
        let overlap = keyword_overlap(&[], &set(&["python"]));
        assert!(overlap.matched.is_empty());
        assert_eq!(overlap.score, 0.0);
    }

    #[test]
    fn test_overlap_matched_is_subset_of_keywords() {
        let keywords = strings(&["java", "spring", "sql"]);
        let overlap = keyword_overlap(&keywords, &set(&["sql", "excel", "java", "word"]));
        assert!(overlap.matched.iter().all(|m| keywords.contains(m)));
    }

    #[test]
    fn test_round_score_two_decimals() {
        assert_eq!(round_score(71.428_571), 71.43);
        assert_eq!(round_score(33.333_333), 33.33);
    }

    #[test]
    fn test_round_score_clamps() {
        assert_eq!(round_score(100.000_001), 100.0);
        assert_eq!(round_score(-3.0), 0.0);
        assert_eq!(round_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_cosine_score_bounds() {
        let job = strings(&["rust", "axum", "tokio"]);
        let same = job.clone();
        let other = strings(&["design", "figma"]);
        let model = TfIdfModel::fit(&[&job, &same, &other]);

        let j = model.transform(&job);
        assert_eq!(cosine_score(&j, &model.transform(&same)), 100.0);
        assert_eq!(cosine_score(&j, &model.transform(&other)), 0.0);
    }
}
