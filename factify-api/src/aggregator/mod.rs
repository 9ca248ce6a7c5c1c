//! Aggregator - concurrent fan-out and verdict reduction
//!
//! Architecture: Providers (parallel) → Outcomes (all retained) → Reduction
//!
//! Every adapter is invoked concurrently for each request and all of them are
//! awaited; a failure in one slot never cancels or delays the others. The
//! settled outcomes are then reduced by a pure function, so the verdict depends
//! only on the outcomes and never on the order in which they arrived.

pub mod digest;
pub mod narrative;
pub mod reduce;

use factify_common::Settings;
use futures::future::join_all;
use std::time::Instant;
use tracing::{debug, info};

use crate::models::{CheckRequest, Source, Verdict};
use crate::providers::{AiAssessment, FactCheckReport, ProviderOutcome, ProviderSet};

pub use reduce::{reduce, DEFAULT_CONFIDENCE};

/// Settled outcome of every provider slot for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Outcomes {
    pub analysis: ProviderOutcome<AiAssessment>,
    /// One entry per fact-check database, in registration order
    pub fact_checks: Vec<ProviderOutcome<FactCheckReport>>,
    pub sources: ProviderOutcome<Vec<Source>>,
}

impl Outcomes {
    /// Number of provider slots that produced a payload
    pub fn successes(&self) -> usize {
        usize::from(self.analysis.is_success())
            + self.fact_checks.iter().filter(|o| o.is_success()).count()
            + usize::from(self.sources.is_success())
    }
}

/// Reduction parameters taken from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionConfig {
    /// Characters of AI assessment quoted in the analysis text
    pub excerpt_chars: usize,
    /// Sources kept in the verdict
    pub max_sources: usize,
}

impl ReductionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            excerpt_chars: settings.ai.excerpt_chars,
            max_sources: settings.limits.max_sources,
        }
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Fans a request out to every provider and reduces the results
pub struct Aggregator {
    providers: ProviderSet,
    config: ReductionConfig,
}

impl Aggregator {
    pub fn new(providers: ProviderSet, config: ReductionConfig) -> Self {
        Self { providers, config }
    }

    /// Invoke all providers concurrently and wait for every one to settle
    pub async fn collect(&self, request: &CheckRequest) -> Outcomes {
        let text = request.text();

        let analysis = self.providers.analysis.invoke(text, request.context());
        let fact_checks = join_all(
            self.providers
                .fact_checkers
                .iter()
                .map(|provider| provider.invoke(text)),
        );
        let sources = self.providers.discovery.invoke(text, self.config.max_sources);

        let (analysis, fact_checks, sources) = tokio::join!(analysis, fact_checks, sources);

        Outcomes {
            analysis,
            fact_checks,
            sources,
        }
    }

    /// Produce the verdict for a validated request
    ///
    /// Never fails: with every provider degraded the result is the default
    /// questionable verdict.
    pub async fn evaluate(&self, request: &CheckRequest) -> Verdict {
        let started = Instant::now();
        let outcomes = self.collect(request).await;

        debug!(
            successes = outcomes.successes(),
            fact_check_slots = outcomes.fact_checks.len(),
            "Provider fan-out settled"
        );

        let verdict = reduce(&outcomes, &self.config);

        info!(
            status = %verdict.status,
            confidence = verdict.confidence,
            sources = verdict.sources.len(),
            databases_responded = verdict.fact_check_summary.databases_responded,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Verdict reduced"
        );

        verdict
    }
}
