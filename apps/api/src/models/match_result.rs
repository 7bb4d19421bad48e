use serde::{Deserialize, Serialize};

use crate::matching::eligibility::Eligibility;

/// Per-resume screening outcome. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub filename: String,
    pub job_keywords: Vec<String>,
    /// Always a subset of `job_keywords`, in the same order.
    pub matched_keywords: Vec<String>,
    /// 0 – 100, two decimals
    pub match_score: f64,
    /// 0 means no experience pattern matched.
    pub experience: u32,
    pub eligibility: Eligibility,
}
