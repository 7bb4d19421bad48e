//! Text Extraction: turns uploaded bytes into lowercased plain text.
//!
//! Pluggable, trait-based like the scorer seam: `AppState` holds an
//! `Arc<dyn TextExtractor>`. Default: `DocumentTextExtractor` (PDF via
//! `pdf-extract`, plain text decoded as UTF-8).
//!
//! A file that cannot be read never fails the batch: `extract_or_empty`
//! downgrades every `ExtractionError` to an empty string.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A single uploaded file from the multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// How an upload's bytes should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Content type wins over extension. Unknown uploads are treated as PDF.
    pub fn detect(upload: &Upload) -> Self {
        if let Some(content_type) = upload.content_type.as_deref() {
            let content_type = content_type.to_ascii_lowercase();
            if content_type == "application/pdf" {
                return DocumentKind::Pdf;
            }
            if content_type.starts_with("text/") {
                return DocumentKind::PlainText;
            }
        }

        let filename = upload.filename.to_ascii_lowercase();
        if filename.ends_with(".txt") || filename.ends_with(".md") {
            DocumentKind::PlainText
        } else {
            DocumentKind::Pdf
        }
    }
}

/// The text extractor trait. Implement this to swap extraction backends
/// without touching the handler.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the upload's text, lowercased. Empty when there is no text.
    async fn extract(&self, upload: &Upload) -> Result<String, ExtractionError>;
}

/// Default extractor: PDF and plain-text uploads.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, upload: &Upload) -> Result<String, ExtractionError> {
        let text = match DocumentKind::detect(upload) {
            DocumentKind::PlainText => String::from_utf8_lossy(&upload.bytes).into_owned(),
            DocumentKind::Pdf => {
                // pdf-extract is CPU-bound and may panic on malformed input;
                // a panic surfaces here as a JoinError.
                let bytes = upload.bytes.clone();
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await?
                    .map_err(|e| ExtractionError::Pdf(e.to_string()))?
            }
        };
        Ok(text.to_lowercase())
    }
}

/// Extracts text, logging and swallowing failures so one bad file cannot
/// abort its siblings.
pub async fn extract_or_empty(extractor: &dyn TextExtractor, upload: &Upload) -> String {
    match extractor.extract(upload).await {
        Ok(text) => text,
        Err(e) => {
            warn!(filename = %upload.filename, "Text extraction failed, scoring as empty: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, content_type: Option<&str>, bytes: &'static [u8]) -> Upload {
        Upload {
            filename: filename.to_string(),
            content_type: content_type.map(String::from),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[test]
    fn test_detect_by_content_type() {
        let pdf = upload("resume", Some("application/pdf"), b"");
        let txt = upload("resume.pdf", Some("text/plain; charset=utf-8"), b"");
        assert_eq!(DocumentKind::detect(&pdf), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(&txt), DocumentKind::PlainText);
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            DocumentKind::detect(&upload("CV.TXT", None, b"")),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::detect(&upload("cv.pdf", Some("application/octet-stream"), b"")),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::detect(&upload("cv", None, b"")), DocumentKind::Pdf);
    }

    #[tokio::test]
    async fn test_plain_text_is_lowercased() {
        let file = upload("cv.txt", Some("text/plain"), b"Senior RUST Engineer, 6 Years");
        let text = DocumentTextExtractor.extract(&file).await.unwrap();
        assert_eq!(text, "senior rust engineer, 6 years");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let file = upload("cv.txt", None, b"rust \xff engineer");
        let text = DocumentTextExtractor.extract(&file).await.unwrap();
        assert!(text.starts_with("rust "));
        assert!(text.ends_with(" engineer"));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_yields_empty_text() {
        let file = upload("cv.pdf", Some("application/pdf"), b"definitely not a pdf");
        let text = extract_or_empty(&DocumentTextExtractor, &file).await;
        assert!(text.is_empty());
    }
}
