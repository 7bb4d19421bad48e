/// Identifier given to the job description when it enters the pipeline.
pub const JOB_DOCUMENT_ID: &str = "job";

/// Text as produced by the extractor, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Upload filename, or `"job"` for the job description.
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn job(text: impl Into<String>) -> Self {
        Self::new(JOB_DOCUMENT_ID, text)
    }
}
