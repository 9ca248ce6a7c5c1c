//! User-facing verdict text

use crate::models::VerdictStatus;
use crate::providers::AiAssessment;
use crate::utils::excerpt;

/// Analysis text when no AI assessment and no fact-check response is available
pub const GENERIC_DISCLAIMER: &str = "Our analysis examined this claim using multiple verification methods. \
While we couldn't find definitive matches in our fact-checking databases, \
we recommend verifying this information through multiple reliable sources.";

pub fn summary(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::Verified => {
            "Analysis of the provided text suggests it is accurate and supported by evidence."
        }
        VerdictStatus::Questionable => {
            "Analysis of the provided text suggests it needs further verification."
        }
        VerdictStatus::False => {
            "Analysis of the provided text suggests it contains false or misleading claims."
        }
        VerdictStatus::Mixed => {
            "Analysis of the provided text suggests it mixes accurate and inaccurate claims."
        }
    }
}

/// Media-literacy advice for the final status
pub fn education(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::Verified => {
            "When information is verified, still consider: Is the source recent? \
             Are there multiple independent confirmations? Does the context matter?"
        }
        VerdictStatus::Questionable => {
            "Red flags to watch for: Lack of credible sources, emotional language, \
             absolute statements, missing context, or outdated information."
        }
        VerdictStatus::False => {
            "This appears to be misinformation. Always check: Original source, \
             publication date, author credentials, and cross-reference with fact-checkers."
        }
        VerdictStatus::Mixed => {
            "Mixed evidence requires careful evaluation. Look for: Which parts are accurate, \
             what context is missing, and whether the overall conclusion is supported."
        }
    }
}

/// Join the AI excerpt and the database count, or fall back to the disclaimer
pub fn analysis(
    assessment: Option<&AiAssessment>,
    databases_responded: usize,
    excerpt_chars: usize,
) -> String {
    let mut parts = Vec::with_capacity(2);

    if let Some(ai) = assessment.filter(|ai| !ai.assessment.trim().is_empty()) {
        parts.push(format!("AI Analysis: {}", excerpt(&ai.assessment, excerpt_chars)));
    }

    match databases_responded {
        0 => {}
        1 => parts.push("Cross-referenced with 1 fact-checking database.".to_string()),
        n => parts.push(format!("Cross-referenced with {} fact-checking databases.", n)),
    }

    if parts.is_empty() {
        GENERIC_DISCLAIMER.to_string()
    } else {
        parts.join(" ")
    }
}
