//! Outcome reduction
//!
//! Pure function of the settled outcomes. Fact-check outcomes are visited in
//! registration order and sources are stably sorted, so two runs over the same
//! outcomes always yield the same verdict.

use std::cmp::Ordering;

use super::{digest, narrative, Outcomes, ReductionConfig};
use crate::models::{Confidence, Source, Verdict, VerdictStatus};

/// Confidence when no AI status is adopted
pub const DEFAULT_CONFIDENCE: Confidence = 0.5;

pub fn reduce(outcomes: &Outcomes, config: &ReductionConfig) -> Verdict {
    let assessment = outcomes.analysis.success();

    let mut status = VerdictStatus::Questionable;
    let mut confidence = DEFAULT_CONFIDENCE;
    if let Some(ai) = assessment {
        status = ai.status;
        if let Some(adopted) = status.adopted_confidence() {
            confidence = adopted;
        }
    }

    let fact_check_summary = digest::summarize(&outcomes.fact_checks);
    let analysis = narrative::analysis(
        assessment,
        fact_check_summary.databases_responded,
        config.excerpt_chars,
    );

    let sources = outcomes
        .sources
        .success()
        .map(|found| rank_sources(found, config.max_sources))
        .unwrap_or_default();

    Verdict {
        status,
        verdict: status.verdict_label().to_string(),
        confidence: confidence.clamp(0.0, 1.0),
        summary: narrative::summary(status).to_string(),
        analysis,
        sources,
        education: narrative::education(status).to_string(),
        fact_check_summary,
    }
}

/// Highest credibility first, unscored last, at most `limit`
///
/// Ties keep discovery order.
pub fn rank_sources(sources: &[Source], limit: usize) -> Vec<Source> {
    let mut ranked: Vec<Source> = sources
        .iter()
        .cloned()
        .map(|mut source| {
            source.credibility_score = source
                .credibility_score
                .filter(|score| score.is_finite())
                .map(|score| score.clamp(0.0, 1.0));
            source
        })
        .collect();

    ranked.sort_by(|a, b| compare_scores(b.credibility_score, a.credibility_score));
    ranked.truncate(limit);
    ranked
}

fn compare_scores(a: Option<Confidence>, b: Option<Confidence>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
