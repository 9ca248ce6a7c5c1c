//! Google Fact Check Tools claim search adapter
//!
//! Queries published claim reviews for the request text. The provider limits
//! query length, so the text is truncated before sending; only recent reviews
//! are requested and only the first few claims are kept.

use async_trait::async_trait;
use factify_common::Settings;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{http_client, ClaimItem, FactCheckProvider, FactCheckReport, ProviderError};
use crate::utils::truncate_chars;

const SOURCE_NAME: &str = "Google Fact Check Tools";
const TOOLBOX_URL: &str = "https://toolbox.google.com/factcheck/";

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<ClaimItem>,
}

pub struct GoogleFactCheck {
    api_key: Option<String>,
    base_url: String,
    language_code: String,
    max_age_days: u32,
    query_max_chars: usize,
    max_claims: usize,
    timeout: Duration,
    client: reqwest::Client,
}

impl GoogleFactCheck {
    pub fn from_settings(settings: &Settings) -> reqwest::Result<Self> {
        let cfg = &settings.fact_check;
        Ok(Self {
            api_key: settings.credentials.google_fact_check().map(str::to_string),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            language_code: cfg.language_code.clone(),
            max_age_days: cfg.max_age_days,
            query_max_chars: cfg.query_max_chars,
            max_claims: cfg.max_claims,
            timeout: cfg.timeout(),
            client: http_client(cfg.timeout())?,
        })
    }

    /// Outbound query for `text`, cut to the provider's length limit
    pub fn query_for<'a>(&self, text: &'a str) -> &'a str {
        truncate_chars(text, self.query_max_chars)
    }
}

#[async_trait]
impl FactCheckProvider for GoogleFactCheck {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn search(&self, text: &str) -> Result<FactCheckReport, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        let query = self.query_for(text);
        let max_age_days = self.max_age_days.to_string();

        debug!(query_chars = query.chars().count(), "Searching Google Fact Check Tools");

        let response = self
            .client
            .get(format!("{}/claims:search", self.base_url))
            .query(&[
                ("key", api_key),
                ("query", query),
                ("languageCode", self.language_code.as_str()),
                ("maxAgeDays", max_age_days.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: ClaimSearchResponse = response
            .json()
            .await
            .map_err(|e| {
                ProviderError::invalid(format!("claim search response: {}", e.without_url()))
            })?;

        let claims_found = body.claims.len();
        let mut claims = body.claims;
        claims.truncate(self.max_claims);

        debug!(claims_found, kept = claims.len(), "Fact-check claims received");

        Ok(FactCheckReport {
            source: SOURCE_NAME.to_string(),
            claims_found,
            claims,
            url: TOOLBOX_URL.to_string(),
        })
    }
}
