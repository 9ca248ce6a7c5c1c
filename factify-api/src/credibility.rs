//! Source-credibility table
//!
//! Static domain ratings loaded once per process and read concurrently
//! without synchronization. Lookups normalize the URL host (lowercase, no
//! leading `www.`); unknown hosts get a neutral default record.

use once_cell::sync::Lazy;
use reqwest::Url;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::Confidence;

/// Credibility assigned to hosts missing from the table
pub const DEFAULT_CREDIBILITY: Confidence = 0.5;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Rating {
    credibility: Confidence,
    bias: &'static str,
    category: &'static str,
}

static TABLE: Lazy<HashMap<&'static str, Rating>> = Lazy::new(|| {
    let entries: [(&str, Confidence, &str, &str); 12] = [
        // News organizations
        ("reuters.com", 0.95, "center", "news"),
        ("apnews.com", 0.94, "center", "news"),
        ("bbc.com", 0.92, "center-left", "news"),
        ("npr.org", 0.91, "center-left", "news"),
        // Fact-checkers
        ("snopes.com", 0.88, "center", "fact-check"),
        ("factcheck.org", 0.90, "center", "fact-check"),
        ("politifact.com", 0.87, "center-left", "fact-check"),
        // Academic / government
        ("nih.gov", 0.98, "center", "government"),
        ("cdc.gov", 0.97, "center", "government"),
        ("who.int", 0.96, "center", "international"),
        // Low credibility, kept for reference
        ("infowars.com", 0.15, "right", "conspiracy"),
        ("naturalnews.com", 0.20, "right", "pseudoscience"),
    ];

    entries
        .into_iter()
        .map(|(domain, credibility, bias, category)| {
            (
                domain,
                Rating {
                    credibility: credibility.clamp(0.0, 1.0),
                    bias,
                    category,
                },
            )
        })
        .collect()
});

/// Credibility record for one source domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceCredibility {
    /// Normalized domain (empty when the URL had no usable host)
    pub domain: String,
    pub credibility: Confidence,
    pub bias: String,
    pub category: String,
}

impl SourceCredibility {
    fn unknown(domain: String) -> Self {
        Self {
            domain,
            credibility: DEFAULT_CREDIBILITY,
            bias: UNKNOWN.to_string(),
            category: UNKNOWN.to_string(),
        }
    }

    /// True when the domain was found in the table
    pub fn is_known(&self) -> bool {
        TABLE.contains_key(self.domain.as_str())
    }

    /// Human-readable band for this record's score
    pub fn label(&self) -> &'static str {
        if self.is_known() {
            label(self.credibility)
        } else {
            "unknown - verify independently"
        }
    }
}

/// Look up the credibility of the site a URL points at
///
/// URLs without a scheme are read as `https://`.
pub fn assess(url: &str) -> SourceCredibility {
    let domain = normalize_domain(url).unwrap_or_default();

    match TABLE.get(domain.as_str()) {
        Some(rating) => SourceCredibility {
            domain,
            credibility: rating.credibility,
            bias: rating.bias.to_string(),
            category: rating.category.to_string(),
        },
        None => SourceCredibility::unknown(domain),
    }
}

/// Bucket a score into one of five fixed bands
pub fn label(score: Confidence) -> &'static str {
    if score >= 0.9 {
        "very high credibility"
    } else if score >= 0.8 {
        "high credibility"
    } else if score >= 0.6 {
        "moderate credibility"
    } else if score >= 0.4 {
        "low credibility"
    } else {
        "very low credibility"
    }
}

/// Host of `url`, lowercased, without a leading `www.`
pub fn normalize_domain(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let parsed = Url::parse(url)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{}", url)).ok())?;

    let host = parsed.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
