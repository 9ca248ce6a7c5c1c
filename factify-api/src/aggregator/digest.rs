//! Fact-check database digest
//!
//! Counts how many databases answered, how many claims they reported, and
//! which way their published ratings lean. Informational only: nothing here
//! feeds back into status or confidence.

use crate::models::{FactCheckSummary, RatingSummary};
use crate::providers::{FactCheckReport, ProviderOutcome};

/// Checked first; "mostly false" and "half true" must not land in a pure bucket
const MIXED_PHRASES: &[&str] = &["mixed", "half true", "mostly true", "mostly false"];
const NEGATIVE_PHRASES: &[&str] = &["false", "incorrect", "inaccurate", "misleading", "pants on fire"];
const POSITIVE_PHRASES: &[&str] = &["true", "correct", "accurate", "verified"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBucket {
    Positive,
    Negative,
    Mixed,
}

/// Bucket a textual rating; `None` when no known phrase appears
pub fn classify_rating(rating: &str) -> Option<RatingBucket> {
    let rating = rating.to_lowercase();
    let matches = |phrases: &[&str]| phrases.iter().any(|p| rating.contains(p));

    if matches(MIXED_PHRASES) {
        Some(RatingBucket::Mixed)
    } else if matches(NEGATIVE_PHRASES) {
        Some(RatingBucket::Negative)
    } else if matches(POSITIVE_PHRASES) {
        Some(RatingBucket::Positive)
    } else {
        None
    }
}

pub fn summarize(fact_checks: &[ProviderOutcome<FactCheckReport>]) -> FactCheckSummary {
    let mut summary = FactCheckSummary {
        databases_checked: fact_checks.len(),
        ..Default::default()
    };

    for report in fact_checks.iter().filter_map(ProviderOutcome::success) {
        summary.databases_responded += 1;
        summary.total_claims_found += report.claims_found;

        for rating in report.textual_ratings() {
            tally(&mut summary.rating_summary, classify_rating(&rating));
        }
    }

    summary
}

fn tally(ratings: &mut RatingSummary, bucket: Option<RatingBucket>) {
    ratings.total += 1;
    match bucket {
        Some(RatingBucket::Positive) => ratings.positive += 1,
        Some(RatingBucket::Negative) => ratings.negative += 1,
        Some(RatingBucket::Mixed) => ratings.mixed += 1,
        None => {}
    }
}
