use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /health
/// Returns a fixed status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Backend is live",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-screener"
    }))
}
