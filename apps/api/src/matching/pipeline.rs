//! Match Pipeline: the single screening path from raw text to `MatchResult`s.
//!
//! job text  → normalize → top-N keywords
//! resume    → normalize → fuzzy-correct against keywords ┐
//!           → experience from raw text                   ├→ score → classify
//! (cosine)  → TF-IDF fitted over job + whole batch       ┘

use std::collections::BTreeSet;

use anyhow::{ensure, Result};
use tracing::debug;

use crate::matching::eligibility::classify;
use crate::matching::experience::extract_experience;
use crate::matching::fuzzy::{FuzzyCorrector, DEFAULT_FUZZY_THRESHOLD};
use crate::matching::keywords::{extract_keywords, TfIdfModel, DEFAULT_TOP_N};
use crate::matching::normalizer::normalize;
use crate::matching::scoring::{cosine_score, keyword_overlap, ScoringMode};
use crate::models::document::RawDocument;
use crate::models::match_result::MatchResult;

/// Tunables for the pipeline. Validated once by `MatchPipeline::new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub scoring_mode: ScoringMode,
    /// Maximum size of the job keyword set.
    pub top_n: usize,
    /// Minimum similarity ratio for fuzzy correction, in (0, 1].
    pub fuzzy_threshold: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::default(),
            top_n: DEFAULT_TOP_N,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Job-side output, computed once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct JobProfile {
    pub tokens: Vec<String>,
    pub keywords: Vec<String>,
}

/// Resume-side output before scoring.
struct ResumeProfile<'r> {
    filename: &'r str,
    corrected_tokens: Vec<String>,
    experience: u32,
}

#[derive(Debug, Clone)]
pub struct MatchPipeline {
    settings: PipelineSettings,
}

impl MatchPipeline {
    /// Builds a pipeline, rejecting settings that could never produce a
    /// meaningful score.
    pub fn new(settings: PipelineSettings) -> Result<Self> {
        ensure!(settings.top_n > 0, "keyword limit must be at least 1");
        ensure!(
            settings.fuzzy_threshold > 0.0 && settings.fuzzy_threshold <= 1.0,
            "fuzzy threshold must be in (0, 1], got {}",
            settings.fuzzy_threshold
        );
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Normalizes the job description and selects its keywords.
    pub fn prepare_job(&self, job: &RawDocument) -> JobProfile {
        let tokens = normalize(&job.text);
        let keywords = extract_keywords(&tokens, self.settings.top_n);
        JobProfile { tokens, keywords }
    }

    /// Screens every resume against the job. Output order matches input order.
    pub fn screen(&self, job: &RawDocument, resumes: &[RawDocument]) -> Vec<MatchResult> {
        let job_profile = self.prepare_job(job);
        debug!(
            keywords = ?job_profile.keywords,
            mode = %self.settings.scoring_mode,
            "prepared job profile"
        );

        let profiles: Vec<ResumeProfile<'_>> = resumes
            .iter()
            .map(|resume| self.profile_resume(&job_profile, resume))
            .collect();

        match self.settings.scoring_mode {
            ScoringMode::KeywordOverlap => profiles
                .iter()
                .map(|profile| self.build_result(&job_profile, profile, None))
                .collect(),
            ScoringMode::CosineSimilarity => {
                let mut corpus: Vec<&[String]> = Vec::with_capacity(profiles.len() + 1);
                corpus.push(&job_profile.tokens);
                corpus.extend(profiles.iter().map(|p| p.corrected_tokens.as_slice()));

                let model = TfIdfModel::fit(&corpus);
                let job_vector = model.transform(&job_profile.tokens);

                profiles
                    .iter()
                    .map(|profile| {
                        let resume_vector = model.transform(&profile.corrected_tokens);
                        let score = cosine_score(&job_vector, &resume_vector);
                        self.build_result(&job_profile, profile, Some(score))
                    })
                    .collect()
            }
        }
    }

    fn profile_resume<'r>(&self, job: &JobProfile, resume: &'r RawDocument) -> ResumeProfile<'r> {
        let tokens = normalize(&resume.text);
        let corrector = FuzzyCorrector::new(&job.keywords, self.settings.fuzzy_threshold);
        ResumeProfile {
            filename: &resume.id,
            corrected_tokens: corrector.correct_tokens(&tokens),
            experience: extract_experience(&resume.text),
        }
    }

    /// Assembles the result. `score_override` carries the cosine score; the
    /// keyword overlap still provides `matched_keywords`.
    fn build_result(
        &self,
        job: &JobProfile,
        profile: &ResumeProfile<'_>,
        score_override: Option<f64>,
    ) -> MatchResult {
        let corrected_set: BTreeSet<String> = profile.corrected_tokens.iter().cloned().collect();
        let overlap = keyword_overlap(&job.keywords, &corrected_set);
        let match_score = score_override.unwrap_or(overlap.score);

        MatchResult {
            filename: profile.filename.to_string(),
            job_keywords: job.keywords.clone(),
            matched_keywords: overlap.matched,
            match_score,
            experience: profile.experience,
            eligibility: classify(match_score, profile.experience),
        }
    }
}
