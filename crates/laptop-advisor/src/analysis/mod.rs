//! Laptop analysis pipeline: attribute extraction, general and purpose rubrics, and
//! aggregation into a buy/wait/no verdict.
//!
//! Every stage is a pure function of its inputs. Missing signals degrade to fixed
//! default scores, so the pipeline is total over any input text.

pub mod aggregate;
pub mod domain;
pub mod extraction;
pub mod gate;
pub mod router;
pub mod rubric;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, Aggregate};
pub use domain::{
    AnalysisOutcome, AnalysisReport, AttributeScore, CpuClass, DisplaySpec, GpuSpec,
    RawProductText, StorageSpec, TypedSpecification, UsageProfile, Verdict,
};
pub use extraction::extract;
pub use gate::{is_laptop, rejection_message};
pub use router::analysis_router;
pub use rubric::{score_general, score_purpose};
pub use service::{
    AnalysisService, AnalysisServiceError, TextAnalysisRequest, UrlAnalysisRequest,
};

use tracing::debug;

/// Stateless engine composing extraction, both rubrics, and the aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a product. `budget` is accepted for callers but no rubric consults it.
    pub fn analyze(
        &self,
        text: &RawProductText,
        _budget: Option<f64>,
        purpose: Option<&str>,
    ) -> AnalysisReport {
        let purpose = purpose
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| "general".to_string());
        let profile = UsageProfile::from_tag(&purpose);

        let summary = extract(text);
        let general = score_general(&summary);
        let purpose_scores = score_purpose(&summary, profile);
        let Aggregate {
            general_average,
            purpose_average,
            overall,
            verdict,
            pros,
            cons,
            comment,
            attributes,
        } = aggregate(general, purpose_scores, &purpose);

        debug!(
            ?profile,
            overall,
            verdict = verdict.label(),
            "scored product"
        );

        AnalysisReport {
            overall,
            verdict,
            comment,
            attributes,
            pros,
            cons,
            general_average,
            purpose_average,
            profile,
            purpose,
            summary,
        }
    }

    /// Identity gate followed by scoring. A non-laptop is never scored.
    pub fn evaluate(
        &self,
        text: RawProductText,
        budget: Option<f64>,
        purpose: Option<&str>,
    ) -> AnalysisOutcome {
        if !is_laptop(&text.title, &text.detail_text) {
            debug!(title = %text.title, "product rejected by laptop identity gate");
            let message = rejection_message(&text.title);
            return AnalysisOutcome::not_laptop(text, message);
        }

        let report = self.analyze(&text, budget, purpose);
        AnalysisOutcome::laptop(text, report)
    }
}
