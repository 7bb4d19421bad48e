// Resume Matching Pipeline
// Implements: normalization, keyword extraction, fuzzy correction, experience
// extraction, scoring and eligibility. Everything except `handlers` is pure,
// synchronous computation; handlers run it inside tokio::task::spawn_blocking.

pub mod eligibility;
pub mod experience;
pub mod fuzzy;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod resources;
pub mod scoring;

// Re-export the public API consumed by handlers and startup.
pub use pipeline::{MatchPipeline, PipelineSettings};
pub use scoring::ScoringMode;
