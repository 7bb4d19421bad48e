//! Eligibility Classifier: pure threshold rules over (score, experience).

use serde::{Deserialize, Serialize};

/// Score at or above which a resume is eligible regardless of experience.
pub const STRONG_MATCH_SCORE: f64 = 40.0;
/// Score at or above which a resume is eligible when experience is present.
pub const PARTIAL_MATCH_SCORE: f64 = 25.0;
/// Minimum years required to qualify on a partial match.
pub const MIN_EXPERIENCE_YEARS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    #[serde(rename = "ELIGIBLE")]
    Eligible,
    #[serde(rename = "NOT ELIGIBLE")]
    NotEligible,
}

/// Classifies a scored resume. Total over its numeric domain.
pub fn classify(match_score: f64, experience: u32) -> Eligibility {
    if match_score >= STRONG_MATCH_SCORE {
        return Eligibility::Eligible;
    }
    if match_score >= PARTIAL_MATCH_SCORE && experience >= MIN_EXPERIENCE_YEARS {
        return Eligibility::Eligible;
    }
    Eligibility::NotEligible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_score_is_eligible_without_experience() {
        assert_eq!(classify(40.0, 0), Eligibility::Eligible);
        assert_eq!(classify(100.0, 0), Eligibility::Eligible);
    }

    #[test]
    fn test_partial_score_needs_experience() {
        assert_eq!(classify(25.0, 1), Eligibility::Eligible);
        assert_eq!(classify(39.99, 3), Eligibility::Eligible);
        assert_eq!(classify(25.0, 0), Eligibility::NotEligible);
    }

    #[test]
    fn test_low_score_never_eligible() {
        assert_eq!(classify(24.99, 30), Eligibility::NotEligible);
        assert_eq!(classify(0.0, 0), Eligibility::NotEligible);
    }

    #[test]
    fn test_eligibility_wire_format() {
        assert_eq!(serde_json::to_string(&Eligibility::Eligible).unwrap(), r#""ELIGIBLE""#);
        assert_eq!(
            serde_json::to_string(&Eligibility::NotEligible).unwrap(),
            r#""NOT ELIGIBLE""#
        );
        let parsed: Eligibility = serde_json::from_str(r#""NOT ELIGIBLE""#).unwrap();
        assert_eq!(parsed, Eligibility::NotEligible);
    }
}
