use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use super::domain::{AnalysisOutcome, RawProductText};
use super::AnalysisEngine;
use crate::retrieval::{ProductTextSource, RetrievalError};

/// Analysis request for a live product page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlAnalysisRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub budget: Option<serde_json::Value>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Analysis request carrying product text gathered by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAnalysisRequest {
    #[serde(flatten)]
    pub text: RawProductText,
    #[serde(default)]
    pub budget: Option<serde_json::Value>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Budgets arrive as numbers or numeric strings; anything else is dropped.
fn budget_amount(raw: Option<&serde_json::Value>) -> Option<f64> {
    let raw = raw?;
    raw.as_f64()
        .or_else(|| raw.as_str().and_then(|text| text.trim().parse::<f64>().ok()))
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("url required")]
    MissingUrl,
    #[error("failed to scrape product: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("Failed to scrape product")]
    EmptyProduct,
}

/// Service composing the text source, identity gate, and analysis engine.
pub struct AnalysisService<S> {
    source: Arc<S>,
    engine: AnalysisEngine,
}

impl<S> AnalysisService<S>
where
    S: ProductTextSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            engine: AnalysisEngine::new(),
        }
    }

    pub async fn analyze_url(
        &self,
        request: UrlAnalysisRequest,
    ) -> Result<AnalysisOutcome, AnalysisServiceError> {
        let url = request
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(AnalysisServiceError::MissingUrl)?;

        let text = self.source.fetch(url).await.map_err(|err| {
            warn!(url = %url, error = %err, "product retrieval failed");
            AnalysisServiceError::from(err)
        })?;

        if text.title.is_empty() {
            warn!(url = %url, "product page yielded no title");
            return Err(AnalysisServiceError::EmptyProduct);
        }

        let outcome = self.engine.evaluate(
            text,
            budget_amount(request.budget.as_ref()),
            request.purpose.as_deref(),
        );
        info!(url = %url, is_laptop = outcome.is_laptop, "product analysed");
        Ok(outcome)
    }

    pub fn analyze_text(&self, request: TextAnalysisRequest) -> AnalysisOutcome {
        let TextAnalysisRequest {
            text,
            budget,
            purpose,
        } = request;
        self.engine
            .evaluate(text, budget_amount(budget.as_ref()), purpose.as_deref())
    }
}
