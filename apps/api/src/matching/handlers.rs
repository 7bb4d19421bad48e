//! Axum route handlers for the screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_or_empty, Upload};
use crate::models::document::RawDocument;
use crate::models::match_result::MatchResult;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const FILES_FIELD: &str = "files";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Decoded multipart form for `POST /parse-resumes/`.
#[derive(Debug)]
pub struct ScreeningForm {
    pub job_description: String,
    /// In submission order.
    pub files: Vec<Upload>,
}

impl ScreeningForm {
    /// Reads every field. Unknown fields are skipped; a missing
    /// `job_description` or an empty `files` list is a validation error.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut job_description = None;
        let mut files = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                JOB_DESCRIPTION_FIELD => job_description = Some(field.text().await?),
                FILES_FIELD => {
                    let filename = field
                        .file_name()
                        .map(String::from)
                        .unwrap_or_else(|| format!("file-{}", files.len() + 1));
                    let content_type = field.content_type().map(String::from);
                    let bytes = field.bytes().await?;
                    files.push(Upload {
                        filename,
                        content_type,
                        bytes,
                    });
                }
                other => debug!(field = other, "Ignoring unknown form field"),
            }
        }

        let job_description = job_description.ok_or_else(|| {
            AppError::Validation(format!("'{JOB_DESCRIPTION_FIELD}' field is required"))
        })?;
        if files.is_empty() {
            return Err(AppError::Validation(format!(
                "At least one '{FILES_FIELD}' attachment is required"
            )));
        }

        Ok(Self {
            job_description,
            files,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /parse-resumes/
///
/// Scores every attached resume against the job description. Returns one
/// `MatchResult` per file, in submission order. Files that cannot be read are
/// scored as empty text rather than failing the request.
pub async fn handle_parse_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let form = ScreeningForm::from_multipart(multipart).await?;
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        files = form.files.len(),
        mode = %state.pipeline.settings().scoring_mode,
        "Screening resumes"
    );

    let resumes = extract_resumes(&state, form.files).await?;

    // Scoring is CPU-bound; keep it off the async workers.
    let pipeline = state.pipeline.clone();
    let job = RawDocument::job(form.job_description);
    let results = tokio::task::spawn_blocking(move || pipeline.screen(&job, &resumes))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    for result in &results {
        debug!(
            %request_id,
            filename = %result.filename,
            score = result.match_score,
            experience = result.experience,
            eligibility = ?result.eligibility,
            "Scored resume"
        );
    }

    Ok(Json(results))
}

/// Extracts every upload concurrently and returns documents in input order.
async fn extract_resumes(state: &AppState, uploads: Vec<Upload>) -> Result<Vec<RawDocument>, AppError> {
    let handles: Vec<_> = uploads
        .into_iter()
        .map(|upload| {
            let extractor = state.extractor.clone();
            tokio::spawn(async move {
                let text = extract_or_empty(extractor.as_ref(), &upload).await;
                RawDocument::new(upload.filename, text)
            })
        })
        .collect();

    let mut resumes = Vec::with_capacity(handles.len());
    for handle in handles {
        resumes.push(handle.await.map_err(|e| AppError::Internal(e.into()))?);
    }
    Ok(resumes)
}
