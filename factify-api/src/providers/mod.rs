//! Provider adapters
//!
//! Each adapter wraps exactly one outbound call and normalizes its result to a
//! [`ProviderOutcome`]. Adapters never propagate errors to the caller: missing
//! credentials, HTTP errors, timeouts and malformed payloads all become
//! `ProviderOutcome::Failure`, and the aggregator carries on with whatever
//! other signals arrived.
//!
//! # Adapters
//! 1. **openai** - AI analysis via an OpenAI-compatible chat completion endpoint
//! 2. **anthropic** / **gemini** - alternate AI providers (placeholders)
//! 3. **google_fact_check** - Google Fact Check Tools claim search
//! 4. **placeholder_databases** - Snopes / PolitiFact (no public API)
//! 5. **curated_sources** - source discovery over the curated fact-checker list
//!
//! New providers implement one of the traits below; the aggregator only sees
//! trait objects.

pub mod anthropic;
pub mod curated_sources;
pub mod gemini;
pub mod google_fact_check;
pub mod openai;
pub mod placeholder_databases;

use async_trait::async_trait;
use factify_common::{Error, Result as CommonResult, Settings};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Confidence, Source, VerdictStatus};

pub use anthropic::AnthropicAnalyzer;
pub use curated_sources::{CuratedSource, CuratedSourceDiscovery, CURATED_SOURCES};
pub use gemini::GeminiAnalyzer;
pub use google_fact_check::GoogleFactCheck;
pub use openai::OpenAiAnalyzer;
pub use placeholder_databases::{PolitiFactDatabase, SnopesDatabase};

/// Why an adapter produced no payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Credentials for this provider are absent
    #[error("not configured")]
    NotConfigured,

    /// Placeholder provider with no backing implementation
    #[error("not implemented")]
    NotImplemented,

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    /// Payload missing, not JSON, or missing required fields (detail kept for logs)
    #[error("invalid response")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        ProviderError::InvalidResponse(detail.into())
    }

    /// Extra context not shown in the user-facing reason
    pub fn detail(&self) -> Option<&str> {
        match self {
            ProviderError::InvalidResponse(detail) => Some(detail),
            _ => None,
        }
    }
}

/// The URL is stripped first: query strings can carry API keys
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Status(status.as_u16())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Tagged result of one adapter invocation; always produced, never thrown
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome<T> {
    Success(T),
    Failure(ProviderError),
}

impl<T> ProviderOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ProviderOutcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ProviderOutcome::Success(payload) => Some(payload),
            ProviderOutcome::Failure(_) => None,
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            ProviderOutcome::Success(payload) => Some(payload),
            ProviderOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ProviderError> {
        match self {
            ProviderOutcome::Success(_) => None,
            ProviderOutcome::Failure(err) => Some(err),
        }
    }
}

impl<T> From<Result<T, ProviderError>> for ProviderOutcome<T> {
    fn from(result: Result<T, ProviderError>) -> Self {
        match result {
            Ok(payload) => ProviderOutcome::Success(payload),
            Err(err) => ProviderOutcome::Failure(err),
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Validated structured assessment from an AI provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAssessment {
    /// Coerced to `Questionable` when the provider used an unknown label
    pub status: VerdictStatus,
    /// Clamped to 0.0-1.0
    pub confidence: Confidence,
    pub assessment: String,
    #[serde(default)]
    pub key_claims: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub verification_suggestions: Vec<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Claims returned by one fact-check database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckReport {
    /// Database display name
    pub source: String,
    /// Claims the database reported before capping
    pub claims_found: usize,
    /// First N claims (capped by configuration)
    pub claims: Vec<ClaimItem>,
    pub url: String,
}

impl FactCheckReport {
    /// Lowercased textual ratings across all reviews of all kept claims
    pub fn textual_ratings(&self) -> impl Iterator<Item = String> + '_ {
        self.claims
            .iter()
            .flat_map(|claim| claim.claim_review.iter())
            .filter_map(|review| review.textual_rating.as_deref())
            .map(|rating| rating.trim().to_lowercase())
            .filter(|rating| !rating.is_empty())
    }
}

/// One claim as published by a fact-check database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub claimant: Option<String>,
    #[serde(default)]
    pub claim_date: Option<String>,
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

/// A publisher's review of a claim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub review_date: Option<String>,
    #[serde(default)]
    pub textual_rating: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

// ============================================================================
// Adapter traits
// ============================================================================

/// AI analysis adapter
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Provider identifier for logs (e.g., "OpenAI")
    fn name(&self) -> &'static str;

    /// Upper bound on one `analyze` call
    fn timeout(&self) -> Duration;

    /// Whether the credentials this adapter needs are present
    fn is_configured(&self) -> bool {
        true
    }

    /// Perform the outbound call
    ///
    /// `context` is appended to the outbound query when present.
    async fn analyze(&self, text: &str, context: Option<&str>) -> Result<AiAssessment, ProviderError>;

    /// Run `analyze` under the timeout and normalize the result
    async fn invoke(&self, text: &str, context: Option<&str>) -> ProviderOutcome<AiAssessment> {
        settle(self.name(), self.timeout(), self.analyze(text, context)).await
    }
}

/// Fact-check database adapter
#[async_trait]
pub trait FactCheckProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn timeout(&self) -> Duration;

    fn is_configured(&self) -> bool {
        true
    }

    async fn search(&self, text: &str) -> Result<FactCheckReport, ProviderError>;

    async fn invoke(&self, text: &str) -> ProviderOutcome<FactCheckReport> {
        settle(self.name(), self.timeout(), self.search(text)).await
    }
}

/// Related-source discovery step
#[async_trait]
pub trait SourceDiscovery: Send + Sync {
    fn name(&self) -> &'static str;

    fn timeout(&self) -> Duration;

    /// Find at most `limit` sources related to `text`
    async fn discover(&self, text: &str, limit: usize) -> Result<Vec<Source>, ProviderError>;

    async fn invoke(&self, text: &str, limit: usize) -> ProviderOutcome<Vec<Source>> {
        settle(self.name(), self.timeout(), self.discover(text, limit)).await
    }
}

/// Await one provider call under `timeout`, logging failures
///
/// The timeout only bounds this call; siblings running concurrently are
/// unaffected.
pub async fn settle<T, F>(provider: &'static str, timeout: Duration, call: F) -> ProviderOutcome<T>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    let result = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(timeout)),
    };

    match &result {
        Ok(_) => debug!(provider, "Provider call succeeded"),
        Err(ProviderError::NotConfigured) => {
            debug!(provider, "Provider skipped: not configured")
        }
        Err(err) => warn!(
            provider,
            reason = %err,
            detail = err.detail().unwrap_or(""),
            "Provider call failed"
        ),
    }

    result.into()
}

/// HTTP client shared by all calls of one adapter
///
/// The client-level timeout mirrors the adapter timeout so sockets are not
/// left open after `settle` gives up.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("factify-api/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

// ============================================================================
// Provider set
// ============================================================================

/// Every adapter the aggregator fans out to
#[derive(Clone)]
pub struct ProviderSet {
    pub analysis: Arc<dyn AnalysisProvider>,
    pub fact_checkers: Vec<Arc<dyn FactCheckProvider>>,
    pub discovery: Arc<dyn SourceDiscovery>,
}

impl ProviderSet {
    /// Build the production adapters from settings
    pub fn from_settings(settings: &Settings) -> CommonResult<Self> {
        let analysis = select_analysis_provider(settings)?;

        let google = GoogleFactCheck::from_settings(settings).map_err(client_error)?;
        let fact_checkers: Vec<Arc<dyn FactCheckProvider>> = vec![
            Arc::new(google),
            Arc::new(SnopesDatabase::new(settings.fact_check.timeout())),
            Arc::new(PolitiFactDatabase::new(settings.fact_check.timeout())),
        ];

        let discovery = Arc::new(CuratedSourceDiscovery::new(settings.fact_check.timeout()));

        Ok(Self {
            analysis,
            fact_checkers,
            discovery,
        })
    }
}

/// Pick the AI adapter named by `ai.provider`; unknown names fall back to OpenAI
pub fn select_analysis_provider(settings: &Settings) -> CommonResult<Arc<dyn AnalysisProvider>> {
    let selector = settings.ai.provider.trim().to_ascii_lowercase();
    let provider: Arc<dyn AnalysisProvider> = match selector.as_str() {
        "anthropic" => Arc::new(AnthropicAnalyzer::from_settings(settings)),
        "google" | "gemini" => Arc::new(GeminiAnalyzer::from_settings(settings)),
        other => {
            if other != "openai" {
                warn!(provider = other, "Unknown AI provider, falling back to OpenAI");
            }
            Arc::new(OpenAiAnalyzer::from_settings(settings).map_err(client_error)?)
        }
    };
    Ok(provider)
}

fn client_error(err: reqwest::Error) -> Error {
    Error::Internal(format!("Failed to build HTTP client: {}", err))
}
