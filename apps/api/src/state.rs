use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::matching::MatchPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Validated once at startup; read-only per request.
    pub pipeline: Arc<MatchPipeline>,
    /// Pluggable text extractor. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
