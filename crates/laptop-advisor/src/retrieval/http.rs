use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::page::ProductPage;
use super::{ProductTextSource, RetrievalError};
use crate::analysis::RawProductText;
use crate::config::RetrievalConfig;

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("Invalid url scheme regex"));

pub(crate) fn validate_url(url: &str) -> Result<(), RetrievalError> {
    if HTTP_URL_RE.is_match(url.trim()) {
        Ok(())
    } else {
        Err(RetrievalError::InvalidUrl(url.to_string()))
    }
}

/// Downloads the static product page HTML and extracts its text fields.
#[derive(Debug, Clone)]
pub struct HttpProductFetcher {
    client: reqwest::Client,
}

impl HttpProductFetcher {
    pub fn new(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl ProductTextSource for HttpProductFetcher {
    async fn fetch(&self, url: &str) -> Result<RawProductText, RetrievalError> {
        validate_url(url)?;
        let url = url.trim();

        info!(url = %url, "fetching product page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let text = ProductPage::parse(&html).product_text();
        debug!(
            title_len = text.title.len(),
            bullets_len = text.bullet_text.len(),
            details_len = text.detail_text.len(),
            "extracted product text"
        );
        Ok(text)
    }
}
