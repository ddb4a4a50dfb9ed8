use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::service::{
    AnalysisService, AnalysisServiceError, TextAnalysisRequest, UrlAnalysisRequest,
};
use crate::retrieval::{ProductTextSource, RetrievalError};

/// Router builder exposing the analysis endpoints.
pub fn analysis_router<S>(service: Arc<AnalysisService<S>>) -> Router
where
    S: ProductTextSource + 'static,
{
    Router::new()
        .route("/api/analyze", post(analyze_url_handler::<S>))
        .route("/api/v1/analyze/text", post(analyze_text_handler::<S>))
        .with_state(service)
}

pub(crate) async fn analyze_url_handler<S>(
    State(service): State<Arc<AnalysisService<S>>>,
    axum::Json(request): axum::Json<UrlAnalysisRequest>,
) -> Response
where
    S: ProductTextSource + 'static,
{
    match service.analyze_url(request).await {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(AnalysisServiceError::MissingUrl) => {
            let payload = json!({
                "error": "url required",
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Retrieval(error @ RetrievalError::InvalidUrl(_))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Retrieval(error)) => {
            let payload = json!({
                "error": "Failed to scrape product",
                "detail": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analyze_text_handler<S>(
    State(service): State<Arc<AnalysisService<S>>>,
    axum::Json(request): axum::Json<TextAnalysisRequest>,
) -> Response
where
    S: ProductTextSource + 'static,
{
    let outcome = service.analyze_text(request);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}
