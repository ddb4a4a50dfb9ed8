//! Product text retrieval: the collaborator that turns a product URL into the three
//! text fields the analysis pipeline consumes.

mod http;
mod page;

pub use http::HttpProductFetcher;
pub use page::{clean_text, ProductPage};

use std::future::Future;

use crate::analysis::RawProductText;

/// Failures obtaining product text. These surface before scoring ever runs.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid product url: {0}")]
    InvalidUrl(String),
    #[error("product page request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("product page returned HTTP {status}")]
    Status { status: u16 },
}

/// Source of product text for a URL. One attempt per call; no retry.
pub trait ProductTextSource: Send + Sync {
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<RawProductText, RetrievalError>> + Send;
}
