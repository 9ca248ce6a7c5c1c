//! Verdict types and the fact-check response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confidence score (0.0-1.0)
pub type Confidence = f64;

/// Final classification of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    /// Strong evidence supports the claims
    Verified,
    /// Insufficient evidence or requires more verification
    #[default]
    Questionable,
    /// Evidence contradicts the claims
    False,
    /// Some claims accurate, others not
    Mixed,
}

impl VerdictStatus {
    pub const ALL: [VerdictStatus; 4] = [
        VerdictStatus::Verified,
        VerdictStatus::Questionable,
        VerdictStatus::False,
        VerdictStatus::Mixed,
    ];

    /// Parse an upstream label; anything unrecognized is `Questionable`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "verified" => VerdictStatus::Verified,
            "false" => VerdictStatus::False,
            "mixed" => VerdictStatus::Mixed,
            _ => VerdictStatus::Questionable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Verified => "verified",
            VerdictStatus::Questionable => "questionable",
            VerdictStatus::False => "false",
            VerdictStatus::Mixed => "mixed",
        }
    }

    /// Short user-facing label
    pub fn verdict_label(&self) -> &'static str {
        match self {
            VerdictStatus::Verified => "✓ Verified",
            VerdictStatus::Questionable => "⚠ Needs Verification",
            VerdictStatus::False => "❌ False",
            VerdictStatus::Mixed => "⚠ Mixed Evidence",
        }
    }

    /// Confidence assigned when this status is adopted from AI analysis
    ///
    /// `None` for `Questionable`: adopting it leaves the current confidence alone.
    pub fn adopted_confidence(&self) -> Option<Confidence> {
        match self {
            VerdictStatus::Verified => Some(0.8),
            VerdictStatus::False => Some(0.9),
            VerdictStatus::Mixed => Some(0.6),
            VerdictStatus::Questionable => None,
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supporting source shown with the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credibility_score: Option<Confidence>,
}

/// Claim-review ratings bucketed by direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub positive: usize,
    pub negative: usize,
    pub mixed: usize,
    pub total: usize,
}

/// Digest of the fact-check databases consulted for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckSummary {
    /// Databases queried (successful or not)
    pub databases_checked: usize,
    /// Databases that returned a usable response
    pub databases_responded: usize,
    pub total_claims_found: usize,
    pub rating_summary: RatingSummary,
}

/// Aggregated result for one request, before transport metadata is stamped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub verdict: String,
    pub confidence: Confidence,
    pub summary: String,
    pub analysis: String,
    pub sources: Vec<Source>,
    pub education: String,
    pub fact_check_summary: FactCheckSummary,
}

/// POST /fact-check 200 response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckResponse {
    pub status: VerdictStatus,
    pub verdict: String,
    pub summary: String,
    pub analysis: String,
    pub confidence_score: Confidence,
    pub sources: Vec<Source>,
    pub education: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds spent in aggregation
    pub processing_time: f64,
    pub request_id: Uuid,
    pub fact_check_summary: FactCheckSummary,
}

impl FactCheckResponse {
    /// Stamp timing metadata onto a verdict
    pub fn from_verdict(
        verdict: Verdict,
        request_id: Uuid,
        timestamp: DateTime<Utc>,
        processing_time: f64,
    ) -> Self {
        Self {
            status: verdict.status,
            verdict: verdict.verdict,
            summary: verdict.summary,
            analysis: verdict.analysis,
            confidence_score: verdict.confidence,
            sources: verdict.sources,
            education: verdict.education,
            timestamp,
            processing_time,
            request_id,
            fact_check_summary: verdict.fact_check_summary,
        }
    }
}
