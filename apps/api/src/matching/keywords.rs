//! Keyword Extractor: TF-IDF weighting and top-N keyword selection.
//!
//! Two modes share one model:
//! - per-document: `extract_keywords` fits over the single document (IDF = 1)
//!   and ranks its own terms for display.
//! - whole-corpus: `TfIdfModel::fit` over job + every resume so that vectors
//!   are comparable for cosine scoring.
//!
//! Weights follow the usual smoothed formulation: raw term counts,
//! `idf = ln((1 + n) / (1 + df)) + 1`, L2-normalized document vectors.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Default keyword set size for job descriptions.
pub const DEFAULT_TOP_N: usize = 12;

/// Terms shorter than this (in chars) are never weighted.
const MIN_TERM_CHARS: usize = 2;

/// Sparse L2-normalized TF-IDF vector, keyed by term.
pub type TermVector = BTreeMap<String, f64>;

/// A term with its TF-IDF weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    pub term: String,
    pub weight: f64,
}

/// IDF table fitted over a corpus of normalized documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    idf: HashMap<String, f64>,
}

impl TfIdfModel {
    /// Fits IDF weights over every document in the corpus.
    pub fn fit<D: AsRef<[String]>>(documents: &[D]) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let doc: &[String] = doc.as_ref();
            let distinct: BTreeSet<&str> = doc
                .iter()
                .map(String::as_str)
                .filter(|t| is_weighted_term(t))
                .collect();
            for term in distinct {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        Self { idf }
    }

    /// Projects a document onto the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored. An empty or fully
    /// out-of-vocabulary document yields an empty vector.
    pub fn transform(&self, tokens: &[String]) -> TermVector {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for token in tokens {
            if self.idf.contains_key(token.as_str()) {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let mut vector: TermVector = counts
            .into_iter()
            .map(|(term, count)| (term.to_string(), count as f64 * self.idf[term]))
            .collect();

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Ranks a document's terms by descending weight, ties broken lexicographically.
/// Zero-weight terms are dropped.
pub fn rank_terms(vector: &TermVector) -> Vec<ScoredTerm> {
    let mut scored: Vec<ScoredTerm> = vector
        .iter()
        .filter(|(_, weight)| **weight > 0.0)
        .map(|(term, &weight)| ScoredTerm {
            term: term.clone(),
            weight,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    scored
}

/// Selects the top `top_n` keywords of a single normalized document.
pub fn extract_keywords(tokens: &[String], top_n: usize) -> Vec<String> {
    let model = TfIdfModel::fit(&[tokens]);
    let vector = model.transform(tokens);

    rank_terms(&vector)
        .into_iter()
        .take(top_n)
        .map(|scored| scored.term)
        .collect()
}

/// Cosine similarity of two L2-normalized vectors, 0.0 when either is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn is_weighted_term(term: &str) -> bool {
    term.chars().count() >= MIN_TERM_CHARS
}
